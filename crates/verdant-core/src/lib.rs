//! Verdant Core - Foundational types for the Verdant asset pipeline
//!
//! This crate provides the types all other Verdant crates depend on:
//! - `ContentHash` - SHA-256 based content hashing
//! - Error types and Result alias

mod error;
mod hash;

pub use error::{Result, VerdantError};
pub use hash::ContentHash;
