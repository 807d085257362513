use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub format_quantity: u64,
    #[serde(default)]
    pub tracklist: Vec<TrackEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    // Artist name variation, preferred over `name` when non-empty
    #[serde(default)]
    pub anv: Option<String>,
    // Free-text join word linking this artist to the next one in the credit
    #[serde(default)]
    pub join: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Track,
    Index,
    Heading,
    #[serde(other)]
    Other,
}

impl Default for EntryType {
    fn default() -> Self {
        EntryType::Other
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    #[serde(rename = "type_")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artists: Option<Vec<Artist>>,
    #[serde(default)]
    pub sub_tracks: Vec<TrackEntry>,
}

impl Release {
    pub fn multi_disc(&self) -> bool {
        self.format_quantity > 1
    }
}
