use crate::character::Character;
use crate::source::SearchError;

/// Message shown when a failed search carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// Coarse phase derived from a [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search performed yet, or the query was cleared.
    Idle,
    /// A search is in flight.
    Loading,
    /// The last search returned (possibly zero) records.
    Success,
    /// The last search failed.
    Failed,
}

/// Top-level search state owned by the shell.
///
/// `loading` and `error` are never both set: starting a search clears the
/// error, and finishing one clears `loading` before an error is stored.
/// `has_searched` only goes back to false through [`SearchState::reset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<Character>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Failed
        } else if self.has_searched {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }

    /// Back to `Idle`: the empty query always wins.
    pub fn reset(&mut self) {
        tracing::debug!("search state reset");
        self.results.clear();
        self.loading = false;
        self.error = None;
        self.has_searched = false;
    }

    /// Enter `Loading` for a non-empty query.
    pub fn begin(&mut self) {
        tracing::debug!(had_error = self.error.is_some(), "search state loading");
        self.loading = true;
        self.error = None;
        self.has_searched = true;
    }

    /// Leave `Loading` with the records the search produced.
    pub fn succeed(&mut self, results: Vec<Character>) {
        tracing::debug!(count = results.len(), "search state succeeded");
        self.loading = false;
        self.error = None;
        self.results = results;
    }

    /// Leave `Loading` with a failure.
    pub fn fail(&mut self, error: &SearchError) {
        self.loading = false;
        self.results.clear();
        let message = error_message(error);
        tracing::debug!(%message, "search state failed");
        self.error = Some(message);
    }
}

/// User-visible message for a failed search. Errors without any detail
/// of their own get the generic fallback.
pub fn error_message(error: &SearchError) -> String {
    match error {
        SearchError::Decode(detail) | SearchError::Network(detail) if detail.trim().is_empty() => {
            FALLBACK_ERROR_MESSAGE.to_owned()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Character {
        Character::new("Luke Skywalker", "19BBY", "male", "u1")
    }

    fn server_error() -> SearchError {
        SearchError::Transport {
            status: 500,
            status_text: "Internal Server Error".into(),
        }
    }

    #[test]
    fn starts_idle() {
        let state = SearchState::new();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(state.results.is_empty());
        assert!(!state.has_searched);
    }

    #[test]
    fn begin_enters_loading_and_marks_searched() {
        let mut state = SearchState::new();
        state.begin();
        assert_eq!(state.phase(), SearchPhase::Loading);
        assert!(state.has_searched);
    }

    #[test]
    fn succeed_stores_results_and_clears_loading() {
        let mut state = SearchState::new();
        state.begin();
        state.succeed(vec![luke()]);
        assert_eq!(state.phase(), SearchPhase::Success);
        assert_eq!(state.results, vec![luke()]);
        assert!(!state.loading);
    }

    #[test]
    fn empty_success_is_still_success() {
        let mut state = SearchState::new();
        state.begin();
        state.succeed(vec![]);
        assert_eq!(state.phase(), SearchPhase::Success);
    }

    #[test]
    fn fail_clears_results_and_loading() {
        let mut state = SearchState::new();
        state.begin();
        state.succeed(vec![luke()]);
        state.begin();
        state.fail(&server_error());

        assert_eq!(state.phase(), SearchPhase::Failed);
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("API Error: 500 Internal Server Error")
        );
    }

    #[test]
    fn begin_from_failed_clears_error() {
        let mut state = SearchState::new();
        state.begin();
        state.fail(&server_error());
        state.begin();

        assert_eq!(state.phase(), SearchPhase::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn reset_from_any_phase_returns_to_idle() {
        let mut loading = SearchState::new();
        loading.begin();

        let mut succeeded = SearchState::new();
        succeeded.begin();
        succeeded.succeed(vec![luke()]);

        let mut failed = SearchState::new();
        failed.begin();
        failed.fail(&server_error());

        for mut state in [SearchState::new(), loading, succeeded, failed] {
            state.reset();
            assert_eq!(state, SearchState::default());
            assert_eq!(state.phase(), SearchPhase::Idle);
        }
    }

    #[test]
    fn error_without_detail_uses_fallback() {
        let mut state = SearchState::new();
        state.begin();
        state.fail(&SearchError::Network("  ".into()));
        assert_eq!(state.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn error_with_detail_keeps_it() {
        let error = SearchError::Network("connection refused".into());
        assert_eq!(error_message(&error), "network error: connection refused");
        assert_ne!(error_message(&server_error()), FALLBACK_ERROR_MESSAGE);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn transitions_are_logged_at_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut state = SearchState::new();
            state.begin();
            state.succeed(vec![luke()]);
            state.begin();
            state.fail(&server_error());
            state.reset();
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("search state loading"));
        assert!(log.contains("search state succeeded count=1"));
        assert!(log.contains("search state failed"));
        assert!(log.contains("API Error: 500 Internal Server Error"));
        assert!(log.contains("search state reset"));
    }
}
