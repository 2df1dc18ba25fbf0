//! Error types for the QueryHaus crate
//!
//! This module contains all error types that can be returned by QueryHaus operations.

use clause_builder::QueryError;
use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryHausError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Query template not found: {0}")]
    TemplateNotFound(String),

    #[error("Query template already registered: {0}")]
    TemplateAlreadyRegistered(String),
}
