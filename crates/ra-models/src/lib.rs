//! # ra-models
//!
//! Domain models for Records Admin: the user record consumed from the data
//! layer, the payload handed back to it, and the enumerations both share.

pub use ra_core::traits::{Id, Identifiable};

pub mod types;
pub mod user;

pub use types::{Department, Role, UserStatus};
pub use user::{UserField, UserPayload, UserRecord};
