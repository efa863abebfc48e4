//! Status template packing and progressive shrinking
//!
//! A [`Status`] renders a shared [`Link`] through a user-supplied template
//! and guarantees a best effort at fitting the result into the platform
//! character budget. When the rendered text runs over, fields are shrunk
//! in a fixed order: description first, then title. Everything else
//! passes through untouched.
//!
//! # Examples
//!
//! ```
//! use liblinkcast::status::Status;
//! use liblinkcast::types::Link;
//!
//! let link = Link {
//!     url: "https://example.com/post".to_string(),
//!     permalink: "https://links.example.com/shaare/xyz".to_string(),
//!     title: "Hello".to_string(),
//!     description: String::new(),
//!     tags: "rust web".to_string(),
//! };
//!
//! let status = Status::new(link, "#Linkcast: ${title} ${url} ${tags}", " ", 500);
//! assert_eq!(
//!     status.text(),
//!     "#Linkcast: Hello https://example.com/post #rust #web"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::length::{effective_length, MASTODON_DEFAULT_CHAR_LIMIT};
use crate::tags::tagify;
use crate::types::{Link, Placeholder, StatusPayload, Visibility};

/// Extra slack reserved when a field long enough to be worth cutting is
/// truncated, so the result lands comfortably under the budget instead of
/// right at the boundary.
pub const SHRINK_EXCESS_MARGIN: usize = 25;

const ELLIPSIS: char = '…';

/// One value per template placeholder.
///
/// Every placeholder always has a value: `cw` is a single space and `tags`
/// holds the already-hashtagged form of the raw tag string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFields {
    pub url: String,
    pub permalink: String,
    pub title: String,
    pub tags: String,
    pub description: String,
    pub cw: String,
}

impl StatusFields {
    /// Value substituted for the given placeholder.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Url => &self.url,
            Placeholder::Permalink => &self.permalink,
            Placeholder::Title => &self.title,
            Placeholder::Tags => &self.tags,
            Placeholder::Description => &self.description,
            Placeholder::Cw => &self.cw,
        }
    }

    fn set(&mut self, placeholder: Placeholder, value: String) {
        match placeholder {
            Placeholder::Url => self.url = value,
            Placeholder::Permalink => self.permalink = value,
            Placeholder::Title => self.title = value,
            Placeholder::Tags => self.tags = value,
            Placeholder::Description => self.description = value,
            Placeholder::Cw => self.cw = value,
        }
    }
}

/// A status waiting to be rendered: field values, template, and budget.
///
/// A `Status` is an immutable snapshot. The `with_*` methods return new
/// snapshots sharing no mutable state with the original, so packers
/// derived from one base can be measured and rendered independently.
#[derive(Debug, Clone)]
pub struct Status {
    fields: StatusFields,
    template: String,
    max_length: usize,
}

impl Status {
    /// Build a status from a shared link.
    ///
    /// The raw tag string is hashtagged with [`tagify`] and the `cw` value
    /// is fixed to a single space. A non-positive `max_length` falls back
    /// to [`MASTODON_DEFAULT_CHAR_LIMIT`].
    pub fn new(
        link: Link,
        template: impl Into<String>,
        tag_delimiter: &str,
        max_length: i64,
    ) -> Self {
        let fields = StatusFields {
            tags: tagify(&link.tags, tag_delimiter),
            url: link.url,
            permalink: link.permalink,
            title: link.title,
            description: link.description,
            cw: " ".to_string(),
        };

        Status {
            fields,
            template: template.into(),
            max_length: resolve_max_length(max_length),
        }
    }

    /// The unshrunk field values.
    pub fn fields(&self) -> &StatusFields {
        &self.fields
    }

    /// The resolved character budget.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// New snapshot with one field replaced.
    ///
    /// The value is stored verbatim; tag normalization happens only at
    /// construction time.
    pub fn with_field(&self, placeholder: Placeholder, value: impl Into<String>) -> Status {
        let mut snapshot = self.clone();
        snapshot.fields.set(placeholder, value.into());
        snapshot
    }

    /// New snapshot with a different template.
    pub fn with_template(&self, template: impl Into<String>) -> Status {
        let mut snapshot = self.clone();
        snapshot.template = template.into();
        snapshot
    }

    /// New snapshot with a different budget. Non-positive values fall back
    /// to [`MASTODON_DEFAULT_CHAR_LIMIT`].
    pub fn with_max_length(&self, max_length: i64) -> Status {
        let mut snapshot = self.clone();
        snapshot.max_length = resolve_max_length(max_length);
        snapshot
    }

    /// Render the template against the unshrunk fields. No length
    /// enforcement.
    pub fn full_text(&self) -> String {
        render(&self.fields, &self.template, true)
    }

    /// Effective length of [`full_text`](Status::full_text).
    pub fn full_length(&self) -> usize {
        effective_length(&self.full_text())
    }

    /// Render the template against the shrunk fields.
    pub fn text(&self) -> String {
        render(&self.shrunk_fields(), &self.template, true)
    }

    /// Effective length of [`text`](Status::text).
    pub fn length(&self) -> usize {
        effective_length(&self.text())
    }

    /// Whether the template carries a `${cw}` content-warning marker.
    pub fn has_content_warning(&self) -> bool {
        self.template.contains(Placeholder::Cw.token())
    }

    /// The template content before the first `${cw}` marker, rendered
    /// against the shrunk fields. Empty when there is no marker.
    pub fn main_text(&self) -> String {
        match self.template.split_once(Placeholder::Cw.token()) {
            Some((before, _)) => render(&self.shrunk_fields(), before, true),
            None => String::new(),
        }
    }

    /// The template content after the first `${cw}` marker, rendered
    /// against the shrunk fields. Empty when there is no marker. Unlike
    /// the other render paths, HTML entities are left encoded here.
    pub fn content_warning_text(&self) -> String {
        match self.template.split_once(Placeholder::Cw.token()) {
            Some((_, after)) => render(&self.shrunk_fields(), after, false),
            None => String::new(),
        }
    }

    /// Compute the shrunk copy of the fields that fits (best effort) the
    /// budget.
    ///
    /// At most two fields are ever touched, in order: the description is
    /// truncated or emptied first, then the title. `url`, `permalink`,
    /// `tags`, and `cw` always pass through unchanged. When even an empty
    /// description and title leave the rendered template over budget, the
    /// overflow is accepted as-is.
    pub fn shrunk_fields(&self) -> StatusFields {
        let mut fields = self.fields.clone();

        let full_length = self.full_length();
        if full_length < self.max_length {
            return fields;
        }

        let description_length = effective_length(&fields.description);
        let excess = excess_over_budget(full_length, self.max_length, description_length);
        if description_length as i64 > excess {
            fields.description =
                truncate_to(&fields.description, description_length as i64 - excess);
            return fields;
        }

        // The description alone cannot absorb the excess: drop it entirely
        // and re-measure before deciding the title's fate.
        fields.description.clear();
        let reduced_length = effective_length(&render(&fields, &self.template, true));

        let title_length = effective_length(&fields.title);
        let excess = excess_over_budget(reduced_length, self.max_length, title_length);
        if title_length as i64 > excess {
            fields.title = truncate_to(&fields.title, title_length as i64 - excess);
        } else {
            fields.title.clear();
        }

        fields
    }

    /// Package the rendered status for the transport collaborator.
    ///
    /// Without a content warning the whole rendered text travels as
    /// `status`. With one, the warned content is the `status` body and the
    /// main segment becomes the `spoiler_text`.
    pub fn to_payload(&self, visibility: Visibility) -> StatusPayload {
        if self.has_content_warning() {
            StatusPayload {
                status: self.content_warning_text(),
                spoiler_text: Some(self.main_text()),
                visibility,
            }
        } else {
            StatusPayload {
                status: self.text(),
                spoiler_text: None,
                visibility,
            }
        }
    }
}

fn resolve_max_length(max_length: i64) -> usize {
    if max_length <= 0 {
        MASTODON_DEFAULT_CHAR_LIMIT
    } else {
        max_length as usize
    }
}

/// Substitute every placeholder, convert literal `\n` sequences to real
/// line breaks, and optionally decode HTML character entities.
fn render(fields: &StatusFields, template: &str, decode: bool) -> String {
    let mut output = template.to_string();
    for placeholder in Placeholder::ALL {
        output = output.replace(placeholder.token(), fields.get(placeholder));
    }

    let output = output.replace("\\n", "\n");
    if decode {
        decode_entities(&output)
    } else {
        output
    }
}

/// Decode the five `htmlspecialchars` entities. `&amp;` goes last so
/// double-encoded input decodes exactly one level.
fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// How many characters must go, given how far over budget the full render
/// is. Fields longer than the margin get the margin added on top, so the
/// cut lands clearly under the budget instead of oscillating at it.
fn excess_over_budget(full_length: usize, max_length: usize, field_length: usize) -> i64 {
    let excess = full_length as i64 - max_length as i64;
    if field_length > SHRINK_EXCESS_MARGIN {
        excess + SHRINK_EXCESS_MARGIN as i64
    } else {
        excess
    }
}

/// Keep the first `keep` characters and append an ellipsis. Counts Unicode
/// scalar values, never bytes; a negative `keep` keeps nothing.
fn truncate_to(text: &str, keep: i64) -> String {
    let keep = usize::try_from(keep).unwrap_or(0);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push(ELLIPSIS);
    truncated
}
