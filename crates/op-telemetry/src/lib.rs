//! # OP Telemetry
//!
//! Structured logging for the Ortho+ module subsystems, built on `tracing`
//! and `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use op_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OP_SERVICE_NAME` | `ortho-modules` | Service name attached to every event |
//! | `OP_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `OP_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, init_test_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
