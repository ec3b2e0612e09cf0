//! Test suite for campus-tracker
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared test infrastructure:
//! - Event and store fixtures pinned to a fixed clock
//! - Result assertion macros
//!
//! ### 2. Integration Tests (`integration/`)
//! Tests that drive the public API across modules:
//! - Event registry rules and statistics
//! - Session store persistence through the file backend
//! - Configuration loading and validation
//!
//! ## Running Tests
//!
//! ```bash
//! # Run everything
//! cargo test
//!
//! # Run only unit tests
//! cargo test --lib
//!
//! # Run integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
