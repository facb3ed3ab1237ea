//! Create contract for users

use ra_core::config::FormConfig;
use ra_core::error::ValidationErrors;

use super::base::{UserBaseContract, UserFormData};
use crate::base::{into_result, Contract, ValidationResult};

/// Contract for creating a new user: every field including the password
pub struct CreateUserContract<'a> {
    base: UserBaseContract<'a>,
}

impl<'a> CreateUserContract<'a> {
    pub fn new(config: &'a FormConfig) -> Self {
        Self {
            base: UserBaseContract::new(config),
        }
    }
}

impl<'a, T: UserFormData> Contract<T> for CreateUserContract<'a> {
    fn validate(&self, entity: &T) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(base_errors) = self.base.validate(entity) {
            errors.merge(base_errors);
        }

        self.base
            .validate_password(entity.password(), entity.confirm_password(), &mut errors);

        into_result(errors)
    }
}
