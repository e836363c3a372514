//! Process-wide Tokio runtime.
//!
//! egui owns the main thread, while reqwest needs a Tokio context. `main`
//! enters this runtime once so `tokio::spawn` works from the frame loop:
//!
//! ```rust,no_run
//! use dashboard::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async { /* network I/O */ });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
