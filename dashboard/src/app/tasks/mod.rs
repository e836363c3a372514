//! # Async Tasks
//!
//! Background fetches spawned on the Tokio runtime.

pub mod market;
