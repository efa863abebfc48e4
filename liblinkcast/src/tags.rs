//! Hashtag generation from raw tag strings
//!
//! Shared links carry their tags as a single delimiter-separated string.
//! Before a status is rendered, that string is turned into a sequence of
//! `#hashtag` tokens safe to publish.

/// Turn a raw delimiter-separated tag string into a space-joined hashtag
/// sequence.
///
/// Each part is stripped down to Unicode letters, ASCII digits, and
/// underscores; parts left empty after stripping are skipped; survivors
/// are prefixed with `#`. Empty input yields an empty string. The filter
/// is deliberately permissive: numeric-only tokens are kept.
pub fn tagify(raw: &str, delimiter: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // An empty delimiter cannot split anything: treat the whole input as
    // one token.
    let parts: Vec<&str> = if delimiter.is_empty() {
        vec![raw]
    } else {
        raw.split(delimiter).collect()
    };

    parts
        .into_iter()
        .filter_map(|part| {
            let cleaned: String = part
                .chars()
                .filter(|c| *c == '_' || c.is_ascii_digit() || c.is_alphabetic())
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(format!("#{cleaned}"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagify_space_delimited() {
        assert_eq!(tagify("test dev", " "), "#test #dev");
    }

    #[test]
    fn test_tagify_absent_delimiter_is_single_token() {
        // No comma in the input: the whole string is one tag, and the
        // embedded space is stripped by the character filter.
        assert_eq!(tagify("test dev", ","), "#testdev");
    }

    #[test]
    fn test_tagify_strips_forbidden_characters() {
        assert_eq!(tagify("this-is-a-forbidden-tag", " "), "#thisisaforbiddentag");
    }

    #[test]
    fn test_tagify_keeps_digits_and_underscores() {
        assert_eq!(tagify("This is $EV3N_worse!", " "), "#This #is #EV3N_worse");
    }

    #[test]
    fn test_tagify_underscore_delimiter() {
        assert_eq!(tagify("This is $EV3N_worse!", "_"), "#ThisisEV3N #worse");
    }

    #[test]
    fn test_tagify_empty_input() {
        assert_eq!(tagify("", " "), "");
    }

    #[test]
    fn test_tagify_skips_parts_stripped_to_nothing() {
        assert_eq!(tagify("a !!! b", " "), "#a #b");
    }

    #[test]
    fn test_tagify_numeric_only_token_survives() {
        // Permissive policy: no "must contain a letter" rule.
        assert_eq!(tagify("2024 review", " "), "#2024 #review");
    }

    #[test]
    fn test_tagify_unicode_letters_survive() {
        assert_eq!(tagify("café über", " "), "#café #über");
    }

    #[test]
    fn test_tagify_empty_delimiter() {
        assert_eq!(tagify("rust lang", ""), "#rustlang");
    }
}
