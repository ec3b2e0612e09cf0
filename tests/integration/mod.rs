//! Integration tests for campus-tracker
//!
//! These tests verify the interaction between multiple components
//! through the public API.

pub mod config_validation_tests;
pub mod event_registry_tests;
pub mod session_tests;
