//! Common utilities shared by the forest service and the web surface.
//!
//! This crate provides:
//! - Unified error handling for HTTP and gRPC
//! - Shared configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
