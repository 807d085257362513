pub mod position;
pub mod title;

use crate::fetch::structures::{Artist, EntryType, Release, TrackEntry};

use self::position::{parse_position, Position};
use self::title::{parse_title, Title};

/// A tracklist entry with its position and title parsed into components.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub entry_type: EntryType,
    pub position: Position,
    pub title: Title,
    pub artists: Option<Vec<Artist>>,
}

/// A release whose tracklist has been flattened and parsed.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelease {
    pub artists: Vec<Artist>,
    pub multi_disc: bool,
    pub tracks: Vec<Track>,
}

pub fn parse_release(release: &Release) -> ParsedRelease {
    let multi_disc = release.multi_disc();

    ParsedRelease {
        artists: release.artists.clone(),
        multi_disc,
        tracks: flatten_tracklist(&release.tracklist)
            .into_iter()
            .map(|entry| Track {
                entry_type: entry.entry_type,
                position: parse_position(&entry.position, multi_disc),
                title: parse_title(&entry.title),
                artists: entry.artists,
            })
            .collect(),
    }
}

/// Flatten index entries with sub-tracks into their leaf tracks.
///
/// Only the index entry carries the real song title on such releases, so its
/// title replaces each sub-track's own (usually generic) title.
pub fn flatten_tracklist(tracklist: &[TrackEntry]) -> Vec<TrackEntry> {
    let mut flat = Vec::with_capacity(tracklist.len());

    for entry in tracklist {
        if entry.entry_type == EntryType::Index && !entry.sub_tracks.is_empty() {
            for sub_track in flatten_tracklist(&entry.sub_tracks) {
                flat.push(TrackEntry {
                    title: entry.title.clone(),
                    ..sub_track
                });
            }
        } else {
            flat.push(entry.clone());
        }
    }

    flat
}
