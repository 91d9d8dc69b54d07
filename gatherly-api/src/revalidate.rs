use async_trait::async_trait;

use gatherly_core::revalidate::PathRevalidator;

/// The hosting layer's cache refresh lives out of process; the request is
/// recorded and nothing else happens here.
pub struct LoggingRevalidator;

#[async_trait]
impl PathRevalidator for LoggingRevalidator {
    async fn revalidate(&self, path: &str) {
        tracing::debug!(path, "revalidate requested");
    }
}
