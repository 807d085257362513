use crate::fetch::structures::EntryType;
use crate::parse::title::Title;
use crate::parse::Track;

fn is_track(track: &Track) -> bool {
    track.entry_type == EntryType::Track
}

/// Whether the track belongs to the given disc.
///
/// `None` means "no disc", which is what every position on a single-disc
/// release parses to, so absent compares equal to absent rather than to an
/// empty string.
fn is_from_disc(track: &Track, disc: Option<&str>) -> bool {
    track.position.disc.as_deref() == disc
        && track
            .position
            .track
            .as_deref()
            .map_or(false, |number| !number.is_empty())
}

/// Whether the track is the first (or only) part of a multi-part track.
fn is_first_part(track: &Track) -> bool {
    matches!(track.position.part.as_deref(), None | Some("1") | Some("a"))
}

/// Select the real tracks for the given disc, in tracklist order.
///
/// Unless `all_parts` is set, only the first part of a multi-part track is
/// kept, assuming the file has not been split into its parts.
pub fn select_tracks(tracks: &[Track], disc: Option<&str>, all_parts: bool) -> Vec<Track> {
    tracks
        .iter()
        .filter(|track| {
            is_track(track) && is_from_disc(track, disc) && (all_parts || is_first_part(track))
        })
        .cloned()
        .collect()
}

/// Merge consecutive parts of a multi-part track into one track, combining
/// the title names with `join_string`.
///
/// A run ends as soon as the track number changes; duplicates that are not
/// contiguous are never merged.
pub fn join_multi_part_tracks(tracks: Vec<Track>, join_string: &str) -> Vec<Track> {
    let mut joined = Vec::with_capacity(tracks.len());
    let mut x = 0;

    while x < tracks.len() {
        let track = &tracks[x];
        if track.position.part.is_none() {
            joined.push(track.clone());
            x += 1;
            continue;
        }

        let mut names = vec![track.title.name.clone()];
        let mut y = x + 1;
        while y < tracks.len() && tracks[y].position.track == track.position.track {
            names.push(tracks[y].title.name.clone());
            y += 1;
        }

        joined.push(Track {
            title: Title {
                name: names.join(join_string),
                subtitles: vec![],
            },
            ..track.clone()
        });
        x = y;
    }

    joined
}
