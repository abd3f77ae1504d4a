//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they take generic Message
//! types or callbacks instead.

pub mod book_card;
mod toast;

pub use book_card::BookCardLabels;
pub use toast::{Toast, ToastStyle, view_toast};
