//! Mock platform implementation for testing
//!
//! A configurable mock transport that can simulate successes, failures,
//! and latency, and records every payload it is asked to deliver. It is
//! compiled into regular builds (not just `cfg(test)`) so integration
//! tests can drive the full posting flow without credentials or network
//! access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{PlatformError, Result};
use crate::length::effective_length;
use crate::platforms::Platform;
use crate::types::StatusPayload;

/// Configuration for mock platform behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Platform name (e.g. "mock", "mock-mastodon")
    pub name: String,

    /// Whether authentication should succeed
    pub auth_succeeds: bool,

    /// Whether posting should succeed
    pub post_succeeds: bool,

    /// Error to return on authentication failure
    pub auth_error: Option<String>,

    /// Error to return on posting failure, wrapped as a permanent
    /// `Posting` error unless `transient_failures` is set
    pub post_error: Option<String>,

    /// Report posting failures as transient `Network` errors
    pub transient_failures: bool,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,

    /// Character limit for validation
    pub character_limit: Option<usize>,

    /// Whether the platform is configured
    pub is_configured: bool,

    /// Number of times authenticate has been called
    pub auth_call_count: Arc<Mutex<usize>>,

    /// Number of times post_status has been called
    pub post_call_count: Arc<Mutex<usize>>,

    /// Payloads that have been delivered (for verification)
    pub posted_payloads: Arc<Mutex<Vec<StatusPayload>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            auth_succeeds: true,
            post_succeeds: true,
            auth_error: None,
            post_error: None,
            transient_failures: false,
            delay: Duration::from_millis(0),
            character_limit: None,
            is_configured: true,
            auth_call_count: Arc::new(Mutex::new(0)),
            post_call_count: Arc::new(Mutex::new(0)),
            posted_payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock platform for testing
pub struct MockPlatform {
    config: MockConfig,
    authenticated: bool,
}

impl MockPlatform {
    /// Create a new mock platform with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            authenticated: false,
        }
    }

    /// Create a mock platform that always succeeds
    pub fn success(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// Create a mock platform that fails authentication
    pub fn auth_failure(name: &str, error: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            auth_succeeds: false,
            auth_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock platform that fails posting with a permanent error
    pub fn post_failure(name: &str, error: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            post_succeeds: false,
            post_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock platform that fails posting with a transient network
    /// error
    pub fn flaky(name: &str, error: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            post_succeeds: false,
            post_error: Some(error.to_string()),
            transient_failures: true,
            ..Default::default()
        })
    }

    /// Create a mock platform with a delay
    pub fn with_delay(name: &str, delay: Duration) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            delay,
            ..Default::default()
        })
    }

    /// Create a mock platform with a character limit
    pub fn with_limit(name: &str, limit: usize) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            character_limit: Some(limit),
            ..Default::default()
        })
    }

    /// Create a mock platform that is not configured
    pub fn not_configured(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            is_configured: false,
            ..Default::default()
        })
    }

    /// Get the number of times authenticate was called
    pub fn auth_call_count(&self) -> usize {
        *self.config.auth_call_count.lock().unwrap()
    }

    /// Get the number of times post_status was called
    pub fn post_call_count(&self) -> usize {
        *self.config.post_call_count.lock().unwrap()
    }

    /// Get every payload that was delivered
    pub fn posted_payloads(&self) -> Vec<StatusPayload> {
        self.config.posted_payloads.lock().unwrap().clone()
    }

    /// Shared handles to the call counters and payload record, usable
    /// after the platform itself has been boxed and handed away.
    pub fn probes(&self) -> MockProbes {
        MockProbes {
            post_call_count: Arc::clone(&self.config.post_call_count),
            posted_payloads: Arc::clone(&self.config.posted_payloads),
        }
    }
}

/// Observation handles for a [`MockPlatform`] owned elsewhere.
#[derive(Debug, Clone)]
pub struct MockProbes {
    post_call_count: Arc<Mutex<usize>>,
    posted_payloads: Arc<Mutex<Vec<StatusPayload>>>,
}

impl MockProbes {
    pub fn post_call_count(&self) -> usize {
        *self.post_call_count.lock().unwrap()
    }

    pub fn posted_payloads(&self) -> Vec<StatusPayload> {
        self.posted_payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn authenticate(&mut self) -> Result<()> {
        *self.config.auth_call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.auth_succeeds {
            self.authenticated = true;
            Ok(())
        } else {
            let error_msg = self
                .config
                .auth_error
                .clone()
                .unwrap_or_else(|| "Mock authentication failed".to_string());
            Err(PlatformError::Authentication(error_msg).into())
        }
    }

    async fn post_status(&self, payload: &StatusPayload) -> Result<String> {
        *self.config.post_call_count.lock().unwrap() += 1;

        if !self.authenticated {
            return Err(PlatformError::Authentication("Not authenticated".to_string()).into());
        }

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.post_succeeds {
            self.config
                .posted_payloads
                .lock()
                .unwrap()
                .push(payload.clone());

            let post_id = format!("{}:mock-{}", self.config.name, uuid::Uuid::new_v4());
            Ok(post_id)
        } else {
            let error_msg = self
                .config
                .post_error
                .clone()
                .unwrap_or_else(|| "Mock posting failed".to_string());
            if self.config.transient_failures {
                Err(PlatformError::Network(error_msg).into())
            } else {
                Err(PlatformError::Posting(error_msg).into())
            }
        }
    }

    fn validate_content(&self, content: &str) -> Result<()> {
        if content.is_empty() {
            return Err(PlatformError::Validation("Content cannot be empty".to_string()).into());
        }

        if let Some(limit) = self.config.character_limit {
            let length = effective_length(content);
            if length > limit {
                return Err(PlatformError::Validation(format!(
                    "Content exceeds {} character limit (got {} characters)",
                    limit, length
                ))
                .into());
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn character_limit(&self) -> Option<usize> {
        self.config.character_limit
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured
    }
}
