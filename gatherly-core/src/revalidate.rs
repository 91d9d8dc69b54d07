use async_trait::async_trait;

/// The hosting layer's cache-refresh hook. Actions call it after every
/// write; the result is deliberately not surfaced.
#[async_trait]
pub trait PathRevalidator: Send + Sync {
    /// Ask the hosting layer to rebuild whatever it cached for `path`.
    async fn revalidate(&self, path: &str);
}
