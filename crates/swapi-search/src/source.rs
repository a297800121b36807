use std::sync::Arc;

use crate::character::Character;

/// Errors that can occur while searching the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The catalog answered with a non-success status.
    #[error("API Error: {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request never reached the catalog.
    #[error("network error: {0}")]
    Network(String),
}

/// A searchable catalog of characters.
#[async_trait::async_trait]
pub trait CharacterSource: Send + Sync {
    /// Human-readable label identifying this source.
    fn label(&self) -> &str;

    /// Search characters by name.
    ///
    /// Implementations return an empty list without doing any work when
    /// `query` is empty after trimming.
    async fn search(&self, query: &str) -> Result<Vec<Character>, SearchError>;
}

#[async_trait::async_trait]
impl<T: CharacterSource + ?Sized> CharacterSource for Arc<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>, SearchError> {
        (**self).search(query).await
    }
}
