//! Core types for Linkcast

use serde::{Deserialize, Serialize};

/// A shared link as supplied by the caller.
///
/// `tags` is the raw delimiter-separated tag string; hashtag generation
/// happens when a [`Status`](crate::status::Status) is built from the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL of the shared link.
    pub url: String,
    /// Permanent URL of the share itself.
    pub permalink: String,
    pub title: String,
    pub description: String,
    /// Raw delimiter-separated tags.
    pub tags: String,
}

impl Link {
    /// Whether this link is a note: a share whose `url` is not an absolute
    /// HTTP(S) URL (a text-only share pointing back at itself).
    pub fn is_note(&self) -> bool {
        !(self.url.starts_with("http:") || self.url.starts_with("https:"))
    }

    /// Return a copy with the permalink substituted for the URL.
    ///
    /// Notes have no external target, so the share's own permalink is what
    /// gets published. Deciding to apply this is the caller's job, before
    /// the status is built.
    pub fn as_note(&self) -> Link {
        Link {
            url: self.permalink.clone(),
            ..self.clone()
        }
    }
}

/// The closed set of placeholder names a status template may use.
///
/// Substitution order is significant and fixed: values are substituted in
/// the order of [`Placeholder::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placeholder {
    Url,
    Permalink,
    Title,
    Tags,
    Description,
    Cw,
}

impl Placeholder {
    /// Every placeholder, in substitution order.
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Url,
        Placeholder::Permalink,
        Placeholder::Title,
        Placeholder::Tags,
        Placeholder::Description,
        Placeholder::Cw,
    ];

    /// The literal `${name}` token this placeholder matches in a template.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Url => "${url}",
            Placeholder::Permalink => "${permalink}",
            Placeholder::Title => "${title}",
            Placeholder::Tags => "${tags}",
            Placeholder::Description => "${description}",
            Placeholder::Cw => "${cw}",
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placeholder::Url => write!(f, "url"),
            Placeholder::Permalink => write!(f, "permalink"),
            Placeholder::Title => write!(f, "title"),
            Placeholder::Tags => write!(f, "tags"),
            Placeholder::Description => write!(f, "description"),
            Placeholder::Cw => write!(f, "cw"),
        }
    }
}

/// Visibility of a published status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
    Direct,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Unlisted => write!(f, "unlisted"),
            Visibility::Private => write!(f, "private"),
            Visibility::Direct => write!(f, "direct"),
        }
    }
}

/// The value handed to the transport collaborator for delivery.
///
/// A status with a content warning is delivered in two pieces: the main
/// segment travels as `spoiler_text` and the warned content as `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_text: Option<String>,
    pub visibility: Visibility,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> Link {
        Link {
            url: "https://example.com/article".to_string(),
            permalink: "https://links.example.com/shaare/abc".to_string(),
            title: "An article".to_string(),
            description: "Worth reading".to_string(),
            tags: "reading web".to_string(),
        }
    }

    #[test]
    fn test_link_with_http_url_is_not_note() {
        let link = sample_link();
        assert!(!link.is_note());

        let mut plain = sample_link();
        plain.url = "http://example.com".to_string();
        assert!(!plain.is_note());
    }

    #[test]
    fn test_link_without_http_url_is_note() {
        let mut note = sample_link();
        note.url = "?abc123".to_string();
        assert!(note.is_note());

        // Only http/https count as external targets.
        note.url = "ftp://example.com/file".to_string();
        assert!(note.is_note());
    }

    #[test]
    fn test_as_note_substitutes_permalink() {
        let mut note = sample_link();
        note.url = "?abc123".to_string();

        let fixed = note.as_note();
        assert_eq!(fixed.url, note.permalink);
        assert_eq!(fixed.title, note.title);
        // The original is untouched.
        assert_eq!(note.url, "?abc123");
    }

    #[test]
    fn test_placeholder_tokens() {
        assert_eq!(Placeholder::Url.token(), "${url}");
        assert_eq!(Placeholder::Cw.token(), "${cw}");
        for placeholder in Placeholder::ALL {
            assert_eq!(
                placeholder.token(),
                format!("${{{placeholder}}}"),
                "token and display name must agree"
            );
        }
    }

    #[test]
    fn test_visibility_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), r#""public""#);
        assert_eq!(serde_json::to_string(&Visibility::Unlisted).unwrap(), r#""unlisted""#);
        assert_eq!(serde_json::to_string(&Visibility::Direct).unwrap(), r#""direct""#);
    }

    #[test]
    fn test_visibility_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!(Visibility::Public.to_string(), "public");
    }

    #[test]
    fn test_payload_omits_absent_spoiler_text() {
        let payload = StatusPayload {
            status: "Hello".to_string(),
            spoiler_text: None,
            visibility: Visibility::Public,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "Hello");
        assert_eq!(json["visibility"], "public");
        assert!(json.get("spoiler_text").is_none());
    }

    #[test]
    fn test_payload_includes_spoiler_text_when_present() {
        let payload = StatusPayload {
            status: "The spoilery part".to_string(),
            spoiler_text: Some("A title".to_string()),
            visibility: Visibility::Unlisted,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "The spoilery part");
        assert_eq!(json["spoiler_text"], "A title");
        assert_eq!(json["visibility"], "unlisted");
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = StatusPayload {
            status: "content".to_string(),
            spoiler_text: Some("warning".to_string()),
            visibility: Visibility::Private,
        };

        let json = serde_json::to_string(&payload).unwrap();
        let back: StatusPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
