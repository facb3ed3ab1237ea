//! User form contracts
//!
//! - `base`: name, username and email rules shared by both modes
//! - `create`: new accounts, password always required
//! - `update`: existing accounts, password rules only when a new one is typed

mod base;
mod create;
mod update;

pub use base::{UserBaseContract, UserFormData};
pub use create::CreateUserContract;
pub use update::UpdateUserContract;

use ra_core::config::FormConfig;
use ra_core::error::ValidationErrors;

use crate::base::Contract;

/// Validate user form data for either mode
///
/// Pure function of its inputs; an empty map means the data may be submitted.
pub fn validate_user_form<T: UserFormData>(
    entity: &T,
    editing: bool,
    config: &FormConfig,
) -> ValidationErrors {
    if editing {
        UpdateUserContract::new(config).errors(entity)
    } else {
        CreateUserContract::new(config).errors(entity)
    }
}

/// Error messages produced by the user contracts
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const USERNAME_REQUIRED: &str = "Username is required";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Email is invalid";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

    pub fn username_too_short(min: usize) -> String {
        format!("Username must be at least {} characters", min)
    }

    pub fn password_too_short(min: usize) -> String {
        format!("Password must be at least {} characters", min)
    }
}
