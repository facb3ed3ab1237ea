//! Base contract for the user form

use ra_core::config::FormConfig;
use ra_core::error::ValidationErrors;
use ra_models::UserField;
use regex::Regex;
use std::sync::LazyLock;

use super::messages;
use crate::base::{into_result, Contract, ValidationResult};

/// `local@domain.tld`: exactly one `@`, no whitespace, a dotted domain
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Form values a user contract reads
pub trait UserFormData: Send + Sync {
    fn name(&self) -> &str;
    fn username(&self) -> &str;
    fn email(&self) -> &str;
    fn password(&self) -> &str;
    fn confirm_password(&self) -> &str;
}

/// Rules shared by the create and update contracts
pub struct UserBaseContract<'a> {
    config: &'a FormConfig,
}

impl<'a> UserBaseContract<'a> {
    pub fn new(config: &'a FormConfig) -> Self {
        Self { config }
    }

    pub fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add(UserField::Name, messages::NAME_REQUIRED);
        }
    }

    pub fn validate_username(&self, username: &str, errors: &mut ValidationErrors) {
        let username = username.trim();
        if username.is_empty() {
            errors.add(UserField::Username, messages::USERNAME_REQUIRED);
            return;
        }

        let min = self.config.username_min_length;
        if username.chars().count() < min {
            errors.add(UserField::Username, messages::username_too_short(min));
        }
    }

    pub fn validate_email(&self, email: &str, errors: &mut ValidationErrors) {
        if email.trim().is_empty() {
            errors.add(UserField::Email, messages::EMAIL_REQUIRED);
            return;
        }

        if !EMAIL_PATTERN.is_match(email) {
            errors.add(UserField::Email, messages::EMAIL_INVALID);
        }
    }

    /// Password presence, length and confirmation
    ///
    /// Callers decide whether the password is validated at all.
    pub fn validate_password(
        &self,
        password: &str,
        confirm_password: &str,
        errors: &mut ValidationErrors,
    ) {
        let min = self.config.password_min_length;
        if password.is_empty() {
            errors.add(UserField::Password, messages::PASSWORD_REQUIRED);
        } else if password.chars().count() < min {
            errors.add(UserField::Password, messages::password_too_short(min));
        }

        if password != confirm_password {
            errors.add(UserField::ConfirmPassword, messages::PASSWORDS_DO_NOT_MATCH);
        }
    }

    pub fn config(&self) -> &'a FormConfig {
        self.config
    }
}

impl<'a, T: UserFormData> Contract<T> for UserBaseContract<'a> {
    fn validate(&self, entity: &T) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(entity.name(), &mut errors);
        self.validate_username(entity.username(), &mut errors);
        self.validate_email(entity.email(), &mut errors);

        into_result(errors)
    }
}
