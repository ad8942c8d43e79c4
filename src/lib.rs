//! Diff Panes library
//!
//! Line diffing, row alignment and the debounced session controller behind a
//! two-pane diff view. The binary in `main.rs` is a thin terminal front end.

pub mod config;
pub mod constant;
pub mod diff;
pub mod messages;
pub mod pane;
pub mod report;
pub mod sync;
pub mod transform;
