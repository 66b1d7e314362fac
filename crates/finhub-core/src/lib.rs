//! # finhub-core
//!
//! Core crate for FinHub. Contains configuration schemas, the typed
//! domain-event vocabulary, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FinHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
