//! Feature modules - business logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod search;
pub mod settings;

pub use search::{SearchController, SearchError, SearchOutcome};
pub use settings::Settings;
