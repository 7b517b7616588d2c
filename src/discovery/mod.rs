//! Discovery list state
//!
//! Information Hiding:
//! - Filter composition rules hidden behind `apply_filters`
//! - Selection bookkeeping hidden behind toggle/remove

pub mod filters;
pub mod selection;

pub use filters::{apply_filters, FilterState};
pub use selection::SelectionSet;
