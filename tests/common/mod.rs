//! Common test utilities for campus-tracker
//!
//! - Fixtures building registries, directories and session stores
//! - Result assertion macros

pub mod fixtures;

pub use fixtures::{EventFactory, fixed_now, registry_at, seeded_registry, session_store};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
