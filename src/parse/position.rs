use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The two grammars are kept separate on purpose: a single universal
    // pattern lets a lone side letter be mistaken for a disc digit.
    static ref POSITION_MULTI_REGEX: Regex = Regex::new(
        r"^(?P<disc>[0-9]+[-.])?(?P<side>[AB])?(?P<track>[0-9]+)(?P<part>\.[0-9]+|[a-z]+)?$"
    )
    .unwrap();
    static ref POSITION_SINGLE_REGEX: Regex =
        Regex::new(r"^(?P<side>[AB])?(?P<track>[0-9]+)(?P<part>\.[0-9]+|[a-z]+)?$").unwrap();
    static ref ROMAN_REGEX: Regex =
        Regex::new(r"(?i)^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap();
}

/// A track position split into its components.
///
/// All fields are `None` when the raw position did not match the grammar,
/// which marks the entry as non-musical for the selection step.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub disc: Option<String>,
    pub side: Option<String>,
    pub track: Option<String>,
    pub part: Option<String>,
}

/// Interpret the whole string as a roman numeral, case-insensitively.
///
/// Only canonical-form numerals count: positions like "DVD" or "IIII" are
/// letter soup, not numbers, and must fall through to the grammar instead
/// of turning into a bogus track number.
fn deromanize(input: &str) -> Option<u64> {
    if input.is_empty() || !ROMAN_REGEX.is_match(input) {
        return None;
    }

    let mut total: u64 = 0;
    let mut prev: u64 = 0;
    for ch in input.chars().rev() {
        let value = match ch.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value < prev {
            total -= value;
        } else {
            total += value;
            prev = value;
        }
    }
    Some(total)
}

/// Parse a raw track position into its `disc`, `side`, `track` and `part`
/// components.
///
/// Some releases number the parts of a multi-part track with roman numerals,
/// so a whole-string roman conversion is attempted before matching; failure
/// is silent and leaves the string as-is.
pub fn parse_position(position: &str, multi_disc: bool) -> Position {
    let deromanized = deromanize(position).map(|n| n.to_string());
    let position = deromanized.as_deref().unwrap_or(position);

    let regex = if multi_disc {
        &*POSITION_MULTI_REGEX
    } else {
        &*POSITION_SINGLE_REGEX
    };
    let caps = match regex.captures(position) {
        Some(caps) => caps,
        None => return Position::default(),
    };

    Position {
        disc: caps
            .name("disc")
            .map(|m| m.as_str().trim_end_matches(|c| c == '-' || c == '.').to_string()),
        side: caps.name("side").map(|m| m.as_str().to_string()),
        track: caps.name("track").map(|m| m.as_str().to_string()),
        // A decimal part keeps its digits only; an alphabetic part is kept
        // as-is.
        part: caps.name("part").map(|m| {
            let part = m.as_str();
            part.strip_prefix('.').unwrap_or(part).to_string()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(disc: Option<&str>, side: Option<&str>, track: &str, part: Option<&str>) -> Position {
        Position {
            disc: disc.map(String::from),
            side: side.map(String::from),
            track: Some(track.to_string()),
            part: part.map(String::from),
        }
    }

    #[test]
    fn parses_plain_track_numbers() {
        assert_eq!(parse_position("1", false), position(None, None, "1", None));
        assert_eq!(parse_position("12", false), position(None, None, "12", None));
    }

    #[test]
    fn parses_side_letters() {
        assert_eq!(
            parse_position("A1", false),
            position(None, Some("A"), "1", None)
        );
        assert_eq!(
            parse_position("B2", false),
            position(None, Some("B"), "2", None)
        );
    }

    #[test]
    fn parses_decimal_parts() {
        assert_eq!(
            parse_position("3.1", false),
            position(None, None, "3", Some("1"))
        );
    }

    #[test]
    fn parses_alpha_parts() {
        assert_eq!(
            parse_position("4b", false),
            position(None, None, "4", Some("b"))
        );
    }

    #[test]
    fn parses_disc_prefixes_on_multi_disc_releases() {
        assert_eq!(
            parse_position("1-2", true),
            position(Some("1"), None, "2", None)
        );
        assert_eq!(
            parse_position("2.5", true),
            position(Some("2"), None, "5", None)
        );
    }

    #[test]
    fn single_disc_grammar_rejects_disc_prefixes() {
        assert_eq!(parse_position("1-2", false), Position::default());
    }

    #[test]
    fn multi_disc_decimals_are_discs_not_parts() {
        // The same raw string means a different thing under each grammar.
        assert_eq!(
            parse_position("1.2", false),
            position(None, None, "1", Some("2"))
        );
        assert_eq!(
            parse_position("1.2", true),
            position(Some("1"), None, "2", None)
        );
    }

    #[test]
    fn roman_numerals_become_track_numbers() {
        assert_eq!(parse_position("II", false), position(None, None, "2", None));
        assert_eq!(parse_position("iv", false), position(None, None, "4", None));
        assert_eq!(
            parse_position("XIV", false),
            position(None, None, "14", None)
        );
    }

    #[test]
    fn unrecognized_positions_are_empty() {
        assert_eq!(parse_position("Video", false), Position::default());
        assert_eq!(parse_position("", false), Position::default());
        assert_eq!(parse_position("1 of 2", false), Position::default());
    }

    #[test]
    fn roman_letter_soup_is_not_a_position() {
        // "DVD" marks bonus-video entries on some releases; it must be
        // excluded as non-musical, not read as track 995.
        assert_eq!(parse_position("DVD", false), Position::default());
        assert_eq!(parse_position("IIII", false), Position::default());
        assert_eq!(parse_position("CDLP", false), Position::default());
    }

    #[test]
    fn deromanize_is_silent_on_non_roman_input() {
        assert_eq!(deromanize("A1"), None);
        assert_eq!(deromanize("1"), None);
        assert_eq!(deromanize(""), None);
        assert_eq!(deromanize("MCMXCIV"), Some(1994));
    }

    #[test]
    fn deromanize_rejects_non_canonical_forms() {
        assert_eq!(deromanize("DVD"), None);
        assert_eq!(deromanize("IIII"), None);
        assert_eq!(deromanize("VV"), None);
        assert_eq!(deromanize("IC"), None);
        assert_eq!(deromanize("iv"), Some(4));
    }
}
