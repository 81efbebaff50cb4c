//! Filtering of the alert list.
//!
//! Provides the filter criteria, the pure filter/sort engine and the staged
//! filter editor.

pub mod editor;
pub mod engine;
pub mod model;
