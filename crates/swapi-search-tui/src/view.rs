use swapi_search::{Character, SearchState};

/// The five mutually exclusive states of the results area.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView<'a> {
    /// A search is in flight.
    Searching,
    /// The last search failed with this message.
    Error(&'a str),
    /// Nothing searched yet.
    Prompt,
    /// The last search matched nothing.
    NoResults,
    /// The last search matched these records.
    Results(&'a [Character]),
}

impl<'a> ResultView<'a> {
    /// Pick the view for `state`. Checked in priority order, so a search in
    /// flight always hides a stale error.
    pub fn of(state: &'a SearchState) -> Self {
        if state.loading {
            Self::Searching
        } else if let Some(error) = &state.error {
            Self::Error(error)
        } else if !state.has_searched {
            Self::Prompt
        } else if state.results.is_empty() {
            Self::NoResults
        } else {
            Self::Results(&state.results)
        }
    }
}

/// "1 character found", "3 characters found".
pub fn count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} character{plural} found")
}
