//! Update contract for users

use ra_core::config::FormConfig;
use ra_core::error::ValidationErrors;

use super::base::{UserBaseContract, UserFormData};
use crate::base::{into_result, Contract, ValidationResult};

/// Contract for editing an existing user
///
/// Leaving the password blank keeps the current one. Once a new password is
/// typed it must satisfy the same rules as on creation.
pub struct UpdateUserContract<'a> {
    base: UserBaseContract<'a>,
}

impl<'a> UpdateUserContract<'a> {
    pub fn new(config: &'a FormConfig) -> Self {
        Self {
            base: UserBaseContract::new(config),
        }
    }

    /// Whether the password fields take part in validation
    pub fn changes_password<T: UserFormData>(entity: &T) -> bool {
        !entity.password().is_empty()
    }
}

impl<'a, T: UserFormData> Contract<T> for UpdateUserContract<'a> {
    fn validate(&self, entity: &T) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(base_errors) = self.base.validate(entity) {
            errors.merge(base_errors);
        }

        if Self::changes_password(entity) {
            self.base
                .validate_password(entity.password(), entity.confirm_password(), &mut errors);
        }

        into_result(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::base::tests::MockForm;

    fn errors_for(form: &MockForm) -> ValidationErrors {
        let config = FormConfig::default();
        UpdateUserContract::new(&config).errors(form)
    }

    #[test]
    fn test_blank_passwords_skip_password_rules() {
        assert!(errors_for(&MockForm::valid()).is_empty());
    }

    #[test]
    fn test_blank_passwords_with_other_errors() {
        let form = MockForm {
            name: " ".to_string(),
            email: "nope".to_string(),
            ..MockForm::valid()
        };
        let errors = errors_for(&form);
        assert!(errors.has_error("name"));
        assert!(errors.has_error("email"));
        assert!(!errors.has_error("password"));
        assert!(!errors.has_error("confirmPassword"));
    }

    #[test]
    fn test_started_password_must_be_completed() {
        let form = MockForm::valid().with_passwords("secret1", "");
        let errors = errors_for(&form);
        assert!(errors.has_error("confirmPassword"));

        let form = MockForm::valid().with_passwords("abc", "abc");
        let errors = errors_for(&form);
        assert!(errors.has_error("password"));
        assert!(!errors.has_error("confirmPassword"));
    }

    #[test]
    fn test_valid_password_change() {
        let form = MockForm::valid().with_passwords("newsecret", "newsecret");
        assert!(errors_for(&form).is_empty());
    }

    #[test]
    fn test_confirmation_alone_is_ignored() {
        let form = MockForm::valid().with_passwords("", "leftover");
        assert!(errors_for(&form).is_empty());
    }
}
