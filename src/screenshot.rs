//! Screenshot collaborator contract.
//!
//! Capture is an opaque external subsystem: the pipeline hands it a URL and
//! receives zero or more viewport images back. It is best-effort by contract;
//! its failure or absence must never fail an audit.

use futures::future::BoxFuture;

use crate::report::ScreenshotSet;

/// Captures page screenshots per viewport class.
pub trait ScreenshotCapturer: Send + Sync {
    /// Captures desktop/tablet/mobile screenshots for `url`. Each slot is
    /// independently optional.
    fn capture_multiple<'a>(&'a self, url: &'a str) -> BoxFuture<'a, ScreenshotSet>;
}

/// The default collaborator: captures nothing.
pub struct DisabledCapturer;

impl ScreenshotCapturer for DisabledCapturer {
    fn capture_multiple<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, ScreenshotSet> {
        Box::pin(async { ScreenshotSet::default() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_capturer_returns_empty_set() {
        let capturer = DisabledCapturer;
        let set = capturer.capture_multiple("https://example.com").await;
        assert!(set.is_empty());
    }
}
