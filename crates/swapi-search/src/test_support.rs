use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Character, CharacterSource, SearchError};

/// In-memory source for testing. Matches names case-insensitively, the
/// way the catalog does, and counts how often it was actually queried.
pub struct InMemorySource {
    label: String,
    characters: Vec<Character>,
    failure: Mutex<Option<SearchError>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl InMemorySource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            characters: Vec::new(),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Make every subsequent search fail with `error`.
    pub fn fail_with(&self, error: SearchError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Number of searches that went past the empty-query short-circuit.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries seen, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CharacterSource for InMemorySource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_owned());

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        let needle = query.to_lowercase();
        Ok(self
            .characters
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
