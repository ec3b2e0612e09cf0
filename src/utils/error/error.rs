//! Error handling for the tracker
//!
//! This module defines the error types used throughout the service.

#![allow(missing_docs)]

use crate::core::events::RegistryError;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the tracker
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Event registration and attendance errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Session errors
    #[error("Session error: {0}")]
    Session(String),

    /// Session storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for TrackerError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            TrackerError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            TrackerError::Auth(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "AUTH_ERROR",
                self.to_string(),
            ),
            TrackerError::Authorization(_) => (
                actix_web::http::StatusCode::FORBIDDEN,
                "AUTHORIZATION_ERROR",
                self.to_string(),
            ),
            TrackerError::Registry(registry_error) => match registry_error {
                RegistryError::NotFound { .. } => (
                    actix_web::http::StatusCode::NOT_FOUND,
                    "EVENT_NOT_FOUND",
                    registry_error.to_string(),
                ),
                RegistryError::Full { .. } => (
                    actix_web::http::StatusCode::CONFLICT,
                    "EVENT_FULL",
                    registry_error.to_string(),
                ),
                RegistryError::AlreadyRegistered { .. } => (
                    actix_web::http::StatusCode::CONFLICT,
                    "ALREADY_REGISTERED",
                    registry_error.to_string(),
                ),
                RegistryError::NotRegistered { .. } => (
                    actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                    "NOT_REGISTERED",
                    registry_error.to_string(),
                ),
                RegistryError::AlreadyAttended { .. } => (
                    actix_web::http::StatusCode::CONFLICT,
                    "ALREADY_ATTENDED",
                    registry_error.to_string(),
                ),
            },
            TrackerError::Session(_) => (
                actix_web::http::StatusCode::CONFLICT,
                "SESSION_ERROR",
                self.to_string(),
            ),
            TrackerError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            TrackerError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            TrackerError::Storage(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "Session storage operation failed".to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl TrackerError {
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::Session(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
