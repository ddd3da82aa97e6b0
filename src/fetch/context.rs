//! Shared audit context.
//!
//! This module defines the `AuditContext` struct that groups the shared
//! resources needed to run audits, reducing function argument counts.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::initialization::{init_client, init_probe_client, init_redirect_client};
use crate::screenshot::{DisabledCapturer, ScreenshotCapturer};

/// Context containing the shared resources needed to run audits.
///
/// Cheap to clone; every field is an `Arc`.
#[derive(Clone)]
pub struct AuditContext {
    /// HTTP client for the primary page fetch (redirects enabled).
    pub client: Arc<reqwest::Client>,
    /// HTTP client for redirect tracing (redirects disabled).
    pub redirect_client: Arc<reqwest::Client>,
    /// Short-timeout client for robots.txt and sitemap probes.
    pub probe_client: Arc<reqwest::Client>,
    /// Screenshot collaborator. Best-effort; the default captures nothing.
    pub screenshots: Arc<dyn ScreenshotCapturer>,
}

impl AuditContext {
    /// Builds a context from configuration, with screenshots disabled.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if any HTTP client fails to build.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        Ok(Self {
            client: init_client(&config.user_agent, timeout)?,
            redirect_client: init_redirect_client(&config.user_agent, timeout)?,
            probe_client: init_probe_client(&config.user_agent)?,
            screenshots: Arc::new(DisabledCapturer),
        })
    }

    /// Replaces the screenshot collaborator.
    pub fn with_screenshots(mut self, capturer: Arc<dyn ScreenshotCapturer>) -> Self {
        self.screenshots = capturer;
        self
    }
}
