//! Utility modules

pub mod runtime;
