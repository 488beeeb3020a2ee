//! BotQuote Core Library
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the BotQuote pricing engine. It includes:
//!
//! - Domain models (Price, PricingRequest, Quote, tier and band tables)
//! - Unified error handling
//! - Statically-configured pricing tables with file/env overrides

pub mod config;
pub mod error;
pub mod models;

pub use config::PricingConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
