//! Mastodon effective-length model
//!
//! Mastodon bills every link at a fixed width when counting characters
//! against the status limit, no matter how long the link really is. This
//! module reproduces that counting convention so the packer can measure
//! text the same way the server will.

use regex::Regex;
use std::sync::LazyLock;

/// Number of characters Mastodon charges for any URL.
pub const MASTODON_URL_CHARS: usize = 23;

/// Default character limit for a status when no instance-specific limit
/// is configured.
pub const MASTODON_DEFAULT_CHAR_LIMIT: usize = 500;

/// Absolute URL pattern: `http://` or `https://` followed by a run of
/// non-whitespace. The match deliberately extends to the next whitespace
/// character, which is how the server delimits links when counting.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^ \n\t\r]*").expect("URL pattern must compile"));

/// Compute the effective length of `text` under Mastodon counting rules.
///
/// Every absolute URL counts as exactly [`MASTODON_URL_CHARS`] characters;
/// everything else is counted in Unicode scalar values, never bytes.
/// Empty input yields 0. This function is total: it cannot fail.
pub fn effective_length(text: &str) -> usize {
    let mut length = 0;
    let mut cursor = 0;

    for url in URL_PATTERN.find_iter(text) {
        length += text[cursor..url.start()].chars().count() + MASTODON_URL_CHARS;
        cursor = url.end();
    }

    length + text[cursor..].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_length_with_url() {
        assert_eq!(
            effective_length("This is a nice toot! URL: https://kalvn.net - goodbye."),
            60
        );
    }

    #[test]
    fn test_effective_length_without_url() {
        assert_eq!(
            effective_length("This is a nice toot! #foo #bar - goodbye."),
            41
        );
    }

    #[test]
    fn test_url_always_counts_fixed_width() {
        // Short and long URLs are billed identically.
        assert_eq!(effective_length("see https://a.io"), 4 + MASTODON_URL_CHARS);
        assert_eq!(
            effective_length("see https://example.com/a/very/long/path?with=query&and=more"),
            4 + MASTODON_URL_CHARS
        );
    }

    #[test]
    fn test_multiple_urls() {
        assert_eq!(
            effective_length("https://a.io and http://b.io"),
            MASTODON_URL_CHARS + 5 + MASTODON_URL_CHARS
        );
    }

    #[test]
    fn test_url_stops_at_whitespace() {
        // The character after the URL is counted literally.
        assert_eq!(
            effective_length("https://kalvn.net\nnext"),
            MASTODON_URL_CHARS + 5
        );
    }

    #[test]
    fn test_non_http_scheme_counts_literally() {
        // Only http/https links get the fixed billing.
        assert_eq!(effective_length("ftp://example.com"), 17);
    }

    #[test]
    fn test_unicode_counts_scalar_values() {
        assert_eq!(effective_length("héllo"), 5);
        assert_eq!(effective_length("日本語のテキスト"), 8);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(effective_length(""), 0);
    }
}
