//! Posting orchestration
//!
//! Ties the pieces together: a shared link is normalized, composed into a
//! status via the configured template, and handed to the transport with
//! retry for transient failures. Delivery is fire-and-forget: an API
//! error is logged and swallowed so it never blocks the application that
//! shared the link.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{LinkcastError, PlatformError, Result};
use crate::platforms::Platform;
use crate::status::Status;
use crate::types::{Link, StatusPayload};

const MAX_ATTEMPTS: u32 = 3;

/// Check if an error is transient and should be retried
///
/// Transient errors include network issues and rate limiting.
/// Permanent errors include authentication and validation failures.
fn is_transient_error(error: &LinkcastError) -> bool {
    match error {
        LinkcastError::Platform(platform_error) => matches!(
            platform_error,
            PlatformError::Network(_) | PlatformError::RateLimit(_)
        ),
        _ => false,
    }
}

/// Deliver a payload with up to [`MAX_ATTEMPTS`] attempts and exponential
/// backoff (1s, 2s) on transient errors. Permanent errors return
/// immediately.
async fn post_with_retry(platform: &dyn Platform, payload: &StatusPayload) -> Result<String> {
    let platform_name = platform.name().to_string();

    for attempt in 1..=MAX_ATTEMPTS {
        match platform.post_status(payload).await {
            Ok(post_id) => {
                if attempt > 1 {
                    info!(
                        "Successfully posted to {} on attempt {}",
                        platform_name, attempt
                    );
                }
                return Ok(post_id);
            }
            Err(e) => {
                if is_transient_error(&e) && attempt < MAX_ATTEMPTS {
                    let delay_secs = 2_u64.pow(attempt - 1);
                    warn!(
                        "Transient error posting to {} (attempt {}/{}): {}. Retrying in {}s...",
                        platform_name, attempt, MAX_ATTEMPTS, e, delay_secs
                    );
                    sleep(Duration::from_secs(delay_secs)).await;
                } else {
                    return Err(e);
                }
            }
        }
    }

    Err(PlatformError::Posting(format!(
        "Failed to post to {} after {} attempts",
        platform_name, MAX_ATTEMPTS
    ))
    .into())
}

/// Composes statuses from shared links and delivers them.
pub struct LinkPoster {
    platform: Box<dyn Platform>,
    config: Config,
}

impl LinkPoster {
    pub fn new(platform: Box<dyn Platform>, config: Config) -> Self {
        Self { platform, config }
    }

    /// Build the status for a link using the configured format, delimiter,
    /// and budget. Notes are normalized first: their permalink replaces
    /// the missing external URL.
    pub fn compose(&self, link: Link) -> Status {
        let link = if link.is_note() { link.as_note() } else { link };
        Status::new(
            link,
            self.config.format(),
            self.config.tag_delimiter(),
            self.config.status.max_length,
        )
    }

    /// Compose and deliver a status for a shared link.
    ///
    /// Returns the platform-assigned status id, or `None` when delivery
    /// failed. Failures are logged and never propagate: sharing a link
    /// must not break because the announcement could not go out.
    pub async fn announce(&self, link: Link) -> Option<String> {
        let status = self.compose(link);
        let payload = status.to_payload(self.config.status.visibility);

        if let Err(e) = self.platform.validate_content(&payload.status) {
            warn!("Refusing to post status: {}", e);
            return None;
        }

        match post_with_retry(self.platform.as_ref(), &payload).await {
            Ok(post_id) => {
                info!("Posted status to {}: {}", self.platform.name(), post_id);
                Some(post_id)
            }
            Err(e) => {
                warn!("Mastodon API error: {}", e);
                None
            }
        }
    }
}
