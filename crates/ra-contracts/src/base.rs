//! Base contract system

use ra_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;

    /// Validate and return the error map, empty when valid
    fn errors(&self, entity: &T) -> ValidationErrors {
        self.validate(entity).err().unwrap_or_default()
    }
}

/// Turn an accumulated error map into a [`ValidationResult`]
pub fn into_result(errors: ValidationErrors) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Contract<String> for NonEmpty {
        fn validate(&self, entity: &String) -> ValidationResult {
            let mut errors = ValidationErrors::new();
            if entity.is_empty() {
                errors.add("value", "can't be blank");
            }
            into_result(errors)
        }
    }

    #[test]
    fn test_errors_defaults_to_empty_map() {
        assert!(NonEmpty.errors(&"x".to_string()).is_empty());
        assert!(NonEmpty.errors(&String::new()).has_error("value"));
    }
}
