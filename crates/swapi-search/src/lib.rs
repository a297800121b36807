pub mod character;
pub mod query;
pub mod source;
pub mod state;

pub use character::{Character, CharacterId};
pub use query::SearchQuery;
pub use source::{CharacterSource, SearchError};
pub use state::{FALLBACK_ERROR_MESSAGE, SearchPhase, SearchState, error_message};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
