//! Transport abstraction for status delivery
//!
//! The packer core produces an in-memory [`StatusPayload`]; actually
//! moving it over the wire is the job of a [`Platform`] implementation.
//! This module defines that narrow boundary. The library ships only a
//! configurable [`mock`](crate::platforms::mock) implementation; real
//! transports live in the applications embedding the library.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::StatusPayload;

pub mod mock;

/// Narrow interface to a status delivery backend.
///
/// Implementations own authentication state and wire concerns. All data
/// shaping happens before a payload reaches this boundary, and failures
/// surface as [`PlatformError`](crate::error::PlatformError)s for the
/// caller to log or retry.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Establish or verify credentials with the backend.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Authentication` when credentials are
    /// missing, rejected, or unverifiable.
    async fn authenticate(&mut self) -> Result<()>;

    /// Deliver a prepared status payload.
    ///
    /// Returns the platform-assigned id of the published status.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Authentication` when not authenticated,
    /// `PlatformError::Posting` when the backend rejects the status, and
    /// `PlatformError::Network` / `PlatformError::RateLimit` for transient
    /// delivery failures.
    async fn post_status(&self, payload: &StatusPayload) -> Result<String>;

    /// Check content against backend requirements before delivery.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Validation` when the content is not
    /// acceptable.
    fn validate_content(&self, content: &str) -> Result<()>;

    /// Lowercase backend identifier (e.g. "mastodon", "mock").
    fn name(&self) -> &str;

    /// The backend's character limit, or `None` when it has no hard limit.
    fn character_limit(&self) -> Option<usize>;

    /// Whether the backend has everything it needs to authenticate.
    fn is_configured(&self) -> bool;
}
