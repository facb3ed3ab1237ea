//! Form field state

use ra_contracts::users::UserFormData;
use ra_core::error::AdminError;
use ra_core::result::AdminResult;
use ra_core::traits::Id;
use ra_models::{Department, Role, UserField, UserPayload, UserRecord, UserStatus};

/// Whether the form creates a new user or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { id: Id },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Values currently entered in the user form
///
/// Role and department always hold exactly one value; there is no
/// "unselected" state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
    pub password: String,
    pub confirm_password: String,
    pub status: UserStatus,
}

impl FormState {
    /// Pre-populate from an existing user. Password fields stay blank.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            role: record.role,
            department: record.department,
            password: String::new(),
            confirm_password: String::new(),
            status: record.status,
        }
    }

    /// Apply a single field change, returning the field that changed
    pub fn apply(&mut self, update: FieldUpdate) -> UserField {
        let field = update.field();
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Username(v) => self.username = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Role(v) => self.role = v,
            FieldUpdate::Department(v) => self.department = v,
            FieldUpdate::Password(v) => self.password = v,
            FieldUpdate::ConfirmPassword(v) => self.confirm_password = v,
            FieldUpdate::Status(v) => self.status = v,
        }
        field
    }

    /// Build the payload handed to the repository
    ///
    /// The confirmation never leaves the form. In edit mode a blank password
    /// means "keep the current one" and is left out as well.
    ///
    /// Name, username and email are trimmed of surrounding whitespace; the
    /// password is passed through untouched.
    pub fn to_payload(&self, mode: FormMode) -> UserPayload {
        let password = if mode.is_edit() && self.password.is_empty() {
            None
        } else {
            Some(self.password.clone())
        };

        UserPayload {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            department: self.department,
            status: self.status,
            password,
        }
    }
}

impl UserFormData for FormState {
    fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

/// A single field-level edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Username(String),
    Email(String),
    Role(Role),
    Department(Department),
    Password(String),
    ConfirmPassword(String),
    Status(UserStatus),
}

impl FieldUpdate {
    pub fn field(&self) -> UserField {
        match self {
            FieldUpdate::Name(_) => UserField::Name,
            FieldUpdate::Username(_) => UserField::Username,
            FieldUpdate::Email(_) => UserField::Email,
            FieldUpdate::Role(_) => UserField::Role,
            FieldUpdate::Department(_) => UserField::Department,
            FieldUpdate::Password(_) => UserField::Password,
            FieldUpdate::ConfirmPassword(_) => UserField::ConfirmPassword,
            FieldUpdate::Status(_) => UserField::Status,
        }
    }

    /// Parse a raw value coming from the host page
    pub fn parse(field: UserField, value: &str) -> AdminResult<Self> {
        let update = match field {
            UserField::Name => FieldUpdate::Name(value.to_string()),
            UserField::Username => FieldUpdate::Username(value.to_string()),
            UserField::Email => FieldUpdate::Email(value.to_string()),
            UserField::Password => FieldUpdate::Password(value.to_string()),
            UserField::ConfirmPassword => FieldUpdate::ConfirmPassword(value.to_string()),
            UserField::Role => FieldUpdate::Role(
                value.parse().map_err(|e| AdminError::invalid_field(field, e))?,
            ),
            UserField::Department => FieldUpdate::Department(
                value.parse().map_err(|e| AdminError::invalid_field(field, e))?,
            ),
            UserField::Status => FieldUpdate::Status(
                value.parse().map_err(|e| AdminError::invalid_field(field, e))?,
            ),
        };
        Ok(update)
    }

    /// Parse a field name and raw value coming from the host page
    pub fn parse_named(name: &str, value: &str) -> AdminResult<Self> {
        let field: UserField = name
            .parse()
            .map_err(|e| AdminError::invalid_field(name, e))?;
        Self::parse(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 9,
            name: "Efua Asante".to_string(),
            username: "easante".to_string(),
            email: "efua@records.gov".to_string(),
            role: Role::Administrator,
            department: Department::Legal,
            status: UserStatus::Inactive,
            created_at: None,
            last_login_at: None,
        }
    }

    #[test]
    fn test_default_selections() {
        let form = FormState::default();
        assert_eq!(form.role, Role::Staff);
        assert_eq!(form.department, Department::Archives);
        assert_eq!(form.status, UserStatus::Active);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_from_record_blanks_passwords() {
        let form = FormState::from_record(&record());
        assert_eq!(form.username, "easante");
        assert_eq!(form.role, Role::Administrator);
        assert_eq!(form.status, UserStatus::Inactive);
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
    }

    #[test]
    fn test_apply_returns_field() {
        let mut form = FormState::default();
        let field = form.apply(FieldUpdate::Department(Department::Finance));
        assert_eq!(field, UserField::Department);
        assert_eq!(form.department, Department::Finance);
    }

    #[test]
    fn test_payload_password_handling() {
        let mut form = FormState::from_record(&record());
        assert_eq!(form.to_payload(FormMode::Edit { id: 9 }).password, None);
        assert_eq!(form.to_payload(FormMode::Create).password, Some(String::new()));

        form.password = "secret1".to_string();
        form.confirm_password = "secret1".to_string();
        assert_eq!(
            form.to_payload(FormMode::Edit { id: 9 }).password.as_deref(),
            Some("secret1")
        );
    }

    #[test]
    fn test_payload_trims_identity_fields() {
        let mut form = FormState::default();
        form.name = "  Ama Owusu ".to_string();
        form.username = "aowusu ".to_string();
        form.email = " ama@records.gov".to_string();

        let payload = form.to_payload(FormMode::Create);
        assert_eq!(payload.name, "Ama Owusu");
        assert_eq!(payload.username, "aowusu");
        assert_eq!(payload.email, "ama@records.gov");
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            FieldUpdate::parse_named("role", "researcher").unwrap(),
            FieldUpdate::Role(Role::Researcher)
        );
        assert_eq!(
            FieldUpdate::parse_named("status", "Inactive").unwrap(),
            FieldUpdate::Status(UserStatus::Inactive)
        );
        assert_eq!(
            FieldUpdate::parse_named("confirmPassword", "x").unwrap(),
            FieldUpdate::ConfirmPassword("x".to_string())
        );

        let err = FieldUpdate::parse_named("role", "guest").unwrap_err();
        assert_eq!(err.error_code(), "invalid_field");

        let err = FieldUpdate::parse_named("isActive", "true").unwrap_err();
        assert!(matches!(err, AdminError::InvalidField { ref field, .. } if field == "isActive"));
    }
}
