//! # ra-core
//!
//! Core types, traits, and utilities for Records Admin.
//!
//! This crate provides the building blocks shared by the other crates:
//! - Error types (`AdminError`, `ValidationErrors`)
//! - Result type alias
//! - Collaborator traits (`Identifiable`, `Repository`)
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
