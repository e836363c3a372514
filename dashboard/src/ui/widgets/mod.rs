//! # Reusable UI Widgets
//!
//! Widgets shared by the dashboard screens.

pub mod asset_card;
pub mod status_bar;
