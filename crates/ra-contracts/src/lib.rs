//! # ra-contracts
//!
//! Contract validation for Records Admin.
//!
//! Contracts validate user form data before it is handed to the data layer.
//! They are pure: the same input always yields the same errors.

pub mod base;
pub mod users;

pub use base::*;
