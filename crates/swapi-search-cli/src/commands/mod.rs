pub mod format;
pub mod search;
