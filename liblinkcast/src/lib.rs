//! Linkcast - announce shared links on the Fediverse
//!
//! This library composes Mastodon statuses from shared links: a
//! user-supplied template is rendered with the link's fields, measured
//! under Mastodon's fixed-width URL counting rules, and progressively
//! shrunk to fit the character budget before being handed to a delivery
//! backend.

pub mod config;
pub mod error;
pub mod length;
pub mod logging;
pub mod platforms;
pub mod poster;
pub mod status;
pub mod tags;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{LinkcastError, Result};
pub use length::{effective_length, MASTODON_DEFAULT_CHAR_LIMIT, MASTODON_URL_CHARS};
pub use poster::LinkPoster;
pub use status::{Status, StatusFields};
pub use tags::tagify;
pub use types::{Link, Placeholder, StatusPayload, Visibility};
