//! # Core Abstractions
//!
//! Foundational types used throughout the dashboard:
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-driven configuration and the tracked asset set
//! - **[`models`]**: Domain types shared by the service, state and UI layers
//! - **[`service`]**: The `MarketService` trait that separates the remote data
//!   source from the application logic
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::core::{DashboardConfig, MarketService};
//! use dashboard::services::api::ApiClient;
//!
//! let config = DashboardConfig::default();
//! let service: Arc<dyn MarketService> = Arc::new(ApiClient::new(&config).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::{DashboardConfig, TrackedAsset};
pub use error::{AppError, Result};
pub use models::{AssetDetail, AssetSummary, Polarity};
pub use service::MarketService;
