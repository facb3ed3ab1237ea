//! User record, write payload and form field names

use chrono::{DateTime, Utc};
use ra_core::traits::{Id, Identifiable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{Department, Role, UserStatus};

/// A user as returned by the data layer
///
/// The password is never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "UserRecordWire")]
pub struct UserRecord {
    pub id: Id,

    pub name: String,

    pub username: String,

    pub email: String,

    pub role: Role,

    pub department: Department,

    /// Canonical status. `isActive` is accepted from older sources.
    pub status: UserStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Incoming shape of [`UserRecord`]
///
/// Older sources send `isActive`, some send it next to `status`. `status`
/// wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecordWire {
    id: Id,
    name: String,
    username: String,
    email: String,
    role: Role,
    department: Department,
    #[serde(default)]
    status: Option<UserStatus>,
    #[serde(default)]
    is_active: Option<UserStatus>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    last_login_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRecordWire> for UserRecord {
    type Error = String;

    fn try_from(wire: UserRecordWire) -> Result<Self, Self::Error> {
        let status = wire
            .status
            .or(wire.is_active)
            .ok_or_else(|| "missing field `status`".to_string())?;

        Ok(Self {
            id: wire.id,
            name: wire.name,
            username: wire.username,
            email: wire.email,
            role: wire.role,
            department: wire.department,
            status,
            created_at: wire.created_at,
            last_login_at: wire.last_login_at,
        })
    }
}

impl UserRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl Identifiable for UserRecord {
    fn id(&self) -> Id {
        self.id
    }
}

/// Sanitized data handed to the data layer on create/update
///
/// There is no confirmation field. `password` is left out entirely when no
/// password change is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPayload {
    /// Payload that rewrites an existing record without touching its password
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            role: record.role,
            department: record.department,
            status: record.status,
            password: None,
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn changes_password(&self) -> bool {
        self.password.is_some()
    }
}

/// Editable fields of the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    Name,
    Username,
    Email,
    Role,
    Department,
    Password,
    ConfirmPassword,
    Status,
}

impl UserField {
    pub const ALL: [UserField; 8] = [
        UserField::Name,
        UserField::Username,
        UserField::Email,
        UserField::Role,
        UserField::Department,
        UserField::Password,
        UserField::ConfirmPassword,
        UserField::Status,
    ];

    /// Field name as used by the host page and in error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Role => "role",
            UserField::Department => "department",
            UserField::Password => "password",
            UserField::ConfirmPassword => "confirmPassword",
            UserField::Status => "status",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserField> for String {
    fn from(field: UserField) -> Self {
        field.as_str().to_string()
    }
}

impl FromStr for UserField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 12,
            name: "Kofi Mensah".to_string(),
            username: "kmensah".to_string(),
            email: "kofi@archive.org".to_string(),
            role: Role::Researcher,
            department: Department::Research,
            status: UserStatus::Active,
            created_at: None,
            last_login_at: None,
        }
    }

    #[test]
    fn test_record_deserializes_status_string() {
        let json = r#"{
            "id": 3,
            "name": "Ama Owusu",
            "username": "aowusu",
            "email": "ama@records.gov",
            "role": "administrator",
            "department": "Records Management",
            "status": "Inactive"
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, Role::Administrator);
        assert_eq!(record.department, Department::RecordsManagement);
        assert_eq!(record.status, UserStatus::Inactive);
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_record_accepts_legacy_is_active() {
        let json = r#"{
            "id": 4,
            "name": "Yaw Boateng",
            "username": "yboateng",
            "email": "yaw@records.gov",
            "role": "staff",
            "department": "Legal",
            "isActive": true,
            "lastLoginAt": "2024-03-01T09:30:00Z"
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_active());
        assert!(record.last_login_at.is_some());
    }

    #[test]
    fn test_record_with_status_and_is_active() {
        let json = r#"{
            "id": 1,
            "name": "Ama Owusu",
            "username": "aowusu",
            "email": "ama@records.gov",
            "role": "staff",
            "department": "Archives",
            "status": "Inactive",
            "isActive": true
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, UserStatus::Inactive);
    }

    #[test]
    fn test_record_without_status_is_rejected() {
        let json = r#"{
            "id": 1,
            "name": "Ama Owusu",
            "username": "aowusu",
            "email": "ama@records.gov",
            "role": "staff",
            "department": "Archives"
        }"#;

        let err = serde_json::from_str::<UserRecord>(json).unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_record_serializes_status_only() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["status"], "active");
        assert!(value.get("isActive").is_none());
    }

    #[test]
    fn test_payload_omits_absent_password() {
        let payload = UserPayload::from_record(&record());
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("confirmPassword"));
        assert_eq!(obj["status"], "active");
        assert!(!payload.changes_password());
    }

    #[test]
    fn test_payload_with_status() {
        let payload = UserPayload::from_record(&record()).with_status(UserStatus::Inactive);
        assert_eq!(payload.status, UserStatus::Inactive);
        assert_eq!(payload.username, "kmensah");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(UserField::ConfirmPassword.as_str(), "confirmPassword");
        assert_eq!("email".parse::<UserField>().unwrap(), UserField::Email);
        assert!("isActive".parse::<UserField>().is_err());
        assert_eq!(String::from(UserField::Name), "name");
    }
}
