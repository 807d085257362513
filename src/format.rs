use any_ascii::any_ascii;
use lazy_static::lazy_static;
use regex::Regex;

use crate::fetch::structures::Artist;
use crate::parse::position::Position;
use crate::parse::title::Title;
use crate::parse::Track;

// Words kept lowercase by the title-casing pass: articles, short function
// words and the standardized artist join words.
static SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor", "of", "on", "or",
    "per", "the", "to", "v", "v.", "via", "vs", "vs.", "feat", "pres",
];

lazy_static! {
    static ref ARTIST_NUMBER_REGEX: Regex = Regex::new(r" \([0-9]+\)$").unwrap();
    static ref INCHES_REGEX: Regex = Regex::new(r#"([0-9]+)""#).unwrap();
}

/// Format the selected tracks as filenames, in order.
pub fn formatted_tracks(artist: &str, tracks: &[Track], mix: bool) -> Vec<String> {
    tracks
        .iter()
        .map(|track| format_track(artist, track, mix))
        .collect()
}

/// Format a single track as a filename (without extension).
///
/// The artist component is only included for multi-artist mixes.
pub fn format_track(artist: &str, track: &Track, mix: bool) -> String {
    let position = format_track_position(&track.position);
    let title = format_track_title(&track.title);

    if mix {
        let artist = format_track_artist(artist, track.artists.as_deref());
        format!("{}-{}-{}", position, artist, title)
    } else {
        format!("{}-{}", position, title)
    }
}

/// The track number, zero-padded to at least two digits.
pub fn format_track_position(position: &Position) -> String {
    format!("{:0>2}", position.track.as_deref().unwrap_or_default())
}

/// The artist filename component for a track.
///
/// Track-specific credits take precedence over the release artist. The
/// credit chain is walked until an artist without a join word terminates it;
/// name variations are preferred and trailing disambiguation numbers (for
/// instance "Cirrus (2)") are dropped.
pub fn format_track_artist(release_artist: &str, artists: Option<&[Artist]>) -> String {
    let credited = match artists {
        None | Some([]) => release_artist.to_string(),
        Some(artists) => {
            let mut parts = Vec::new();

            for artist in artists {
                let name = artist
                    .anv
                    .as_deref()
                    .filter(|anv| !anv.is_empty())
                    .unwrap_or(&artist.name);
                parts.push(ARTIST_NUMBER_REGEX.replace(name, "").into_owned());

                match artist.join.as_deref().filter(|join| !join.is_empty()) {
                    Some(join) => parts.push(standardize_join(join)),
                    None => break,
                }
            }

            parts.join(" ")
        }
    };

    format_name(&credited)
}

fn standardize_join(join: &str) -> String {
    let join = join.to_lowercase();
    match join.as_str() {
        "v." | "v" => "vs".to_string(),
        "presents" => "pres".to_string(),
        "featuring" => "feat".to_string(),
        _ => join,
    }
}

/// The title filename component for a track.
///
/// Only the innermost subtitle makes it into the filename; the outer ones
/// are parsed but intentionally dropped here.
pub fn format_track_title(title: &Title) -> String {
    match title.subtitles.last() {
        Some(subtitle) => format!("{}-{}", format_name(&title.name), format_name(subtitle)),
        None => format_name(&title.name),
    }
}

/// Turn a human-readable artist or title name into a filesystem-safe token.
///
/// The transform chain is order-sensitive; see the tests for the intended
/// behavior of each step.
pub fn format_name(name: &str) -> String {
    let mut name = title_case(&any_ascii(name));

    name = name.replace(" & ", " and ").replace(" + ", " and ");
    name = name.replace('&', " and ").replace('+', " and ");
    // Title-casing treats sub-phrase starts as new sentences, which trips up
    // the indefinite article
    name = name.replace(" A ", " a ");
    name = INCHES_REGEX.replace(&name, "${1}in").into_owned();
    name.retain(|c| c != '\'' && c != '.');
    let name: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect();

    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Title-case a name, keeping small words lowercase (APA style) except at
/// the very start of the string.
fn title_case(name: &str) -> String {
    name.split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index > 0 && SMALL_WORDS.contains(&word.to_lowercase().as_str()) {
                word.to_lowercase()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut capitalized = String::with_capacity(word.len());
    let mut done = false;

    for c in word.chars() {
        if !done && c.is_alphabetic() {
            capitalized.extend(c.to_uppercase());
            done = true;
        } else {
            capitalized.push(c);
        }
    }

    capitalized
}
