//! Utility modules for the tracker
//!
//! - **error**: Error type shared by every module, with HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_logging;
