use swapi_search::{Character, SearchError, SearchQuery};

/// Commands returned by the app to the event loop for side-effect execution.
#[derive(Debug, PartialEq)]
pub enum AppCommand {
    /// No side effect needed.
    None,
    /// Quit the application.
    Quit,
    /// The query text changed; restart the debounce timer with it.
    InputChanged(String),
    /// Run a search. The generation comes back with the result.
    Search { generation: u64, query: SearchQuery },
}

/// Actions dispatched back into the app from timers and async tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input went quiet; search for this (trimmed) query.
    SearchRequested(SearchQuery),
    /// A search finished (or failed).
    SearchCompleted {
        generation: u64,
        result: Result<Vec<Character>, SearchError>,
    },
}
