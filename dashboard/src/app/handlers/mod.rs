//! # User Action Handlers
//!
//! Handlers for search, sort and the detail surface, grouped by view.

pub mod detail;
pub mod listing;
