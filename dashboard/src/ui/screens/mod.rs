//! # Screen Modules
//!
//! - **[`listing`]**: toolbar and card grid
//! - **[`detail`]**: detail window with the price chart
//!
//! Screens receive a cloned [`crate::app::AppState`] snapshot and call
//! `app.handle_*` / `app.open_detail` for user actions, so no lock is held
//! while widgets are laid out.

pub mod detail;
pub mod listing;
