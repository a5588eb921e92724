//! Common utilities shared by consumers of the account domain.
//!
//! This crate provides:
//! - Application error type with user-safe messages
//! - Password hashing configuration

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
