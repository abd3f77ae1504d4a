//! IT Bookstore API module
//!
//! Provides the book search client and the response model types.

mod itbook;
pub mod model;

pub use itbook::{BookClient, DEFAULT_BASE_URL};
pub use model::BookEntry;
