/// A track title split into a name and its trailing parenthesized subtitles.
///
/// Subtitles are stored in their original left-to-right order, so
/// `"Song (Live) (Edit)"` yields `name: "Song"` and
/// `subtitles: ["Live", "Edit"]`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub name: String,
    pub subtitles: Vec<String>,
}

/// Peel trailing parenthetical groups off a raw track title.
///
/// A trailing `)` without a matching `" ("` stops the peeling and stays part
/// of the name.
pub fn parse_title(title: &str) -> Title {
    let mut name = title.to_string();
    let mut subtitles = Vec::new();

    while name.ends_with(')') {
        let index = match name.rfind(" (") {
            Some(index) => index,
            None => break,
        };
        let subtitle = name[index + 2..name.len() - 1].to_string();
        name.truncate(index);
        subtitles.insert(0, subtitle);
    }

    Title { name, subtitles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_titles_have_no_subtitles() {
        let title = parse_title("Halcyon");
        assert_eq!(title.name, "Halcyon");
        assert!(title.subtitles.is_empty());
    }

    #[test]
    fn peels_a_single_subtitle() {
        let title = parse_title("Main Event (Club Mix)");
        assert_eq!(title.name, "Main Event");
        assert_eq!(title.subtitles, vec!["Club Mix"]);
    }

    #[test]
    fn peels_nested_subtitles_in_order() {
        let title = parse_title("Song (Live) (Remix)");
        assert_eq!(title.name, "Song");
        assert_eq!(title.subtitles, vec!["Live", "Remix"]);
    }

    #[test]
    fn peeling_splits_at_the_last_open_group() {
        let title = parse_title("Song (Remix (VIP))");
        assert_eq!(title.name, "Song (Remix");
        assert_eq!(title.subtitles, vec!["VIP)"]);
    }

    #[test]
    fn unmatched_trailing_paren_is_left_untouched() {
        let title = parse_title("Smile :)");
        assert_eq!(title.name, "Smile :)");
        assert!(title.subtitles.is_empty());
    }

    #[test]
    fn well_formed_titles_round_trip() {
        for raw in ["Halcyon", "Main Event (Club Mix)", "Song (Live) (Remix)"] {
            let title = parse_title(raw);
            let mut rebuilt = title.name.clone();
            for subtitle in &title.subtitles {
                rebuilt.push_str(&format!(" ({})", subtitle));
            }
            assert_eq!(rebuilt, raw);
        }
    }
}
