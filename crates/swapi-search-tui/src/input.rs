/// Text field backing the search bar. Editing only; the debounce timer
/// that turns edits into search requests lives with the event loop.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character. Returns false if there was nothing to remove.
    pub fn pop(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
