//! Enumerations shared by user records, payloads and the user form

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    #[default]
    Staff,
    Researcher,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrator, Role::Staff, Role::Researcher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Staff => "staff",
            Role::Researcher => "researcher",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Staff => "Staff",
            Role::Researcher => "Researcher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Organisational department. The first variant is the form default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Department {
    #[default]
    #[serde(rename = "Archives")]
    Archives,
    #[serde(rename = "Records Management")]
    RecordsManagement,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Administration")]
    Administration,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Legal")]
    Legal,
    #[serde(rename = "Library Services")]
    LibraryServices,
    #[serde(rename = "Public Relations")]
    PublicRelations,
}

impl Department {
    /// Every department, in display order
    pub const ALL: [Department; 10] = [
        Department::Archives,
        Department::RecordsManagement,
        Department::Research,
        Department::Administration,
        Department::Finance,
        Department::HumanResources,
        Department::InformationTechnology,
        Department::Legal,
        Department::LibraryServices,
        Department::PublicRelations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Archives => "Archives",
            Department::RecordsManagement => "Records Management",
            Department::Research => "Research",
            Department::Administration => "Administration",
            Department::Finance => "Finance",
            Department::HumanResources => "Human Resources",
            Department::InformationTechnology => "Information Technology",
            Department::Legal => "Legal",
            Department::LibraryServices => "Library Services",
            Department::PublicRelations => "Public Relations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Department::ALL
            .into_iter()
            .find(|dept| dept.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown department '{}'", s))
    }
}

/// Account status
///
/// This is the single canonical representation. Older data sources send
/// either a capitalised string or an `isActive` boolean; both are accepted
/// when deserializing and converted here.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl From<bool> for UserStatus {
    fn from(active: bool) -> Self {
        if active {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }
}

impl From<UserStatus> for bool {
    fn from(status: UserStatus) -> Self {
        status.is_active()
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => f.write_str("Active"),
            UserStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "true" => Ok(UserStatus::Active),
            "inactive" | "false" => Ok(UserStatus::Inactive),
            _ => Err(format!("unknown status '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(active) => Ok(UserStatus::from(active)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Role::default(), Role::Staff);
        assert_eq!(Department::default(), Department::ALL[0]);
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Administrator".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!(" researcher ".parse::<Role>().unwrap(), Role::Researcher);
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn test_department_labels_round_trip() {
        for dept in Department::ALL {
            assert_eq!(dept.label().parse::<Department>().unwrap(), dept);
        }
        assert_eq!(
            "records management".parse::<Department>().unwrap(),
            Department::RecordsManagement
        );
    }

    #[test]
    fn test_status_accepts_strings_and_flags() {
        let parsed: Vec<UserStatus> =
            serde_json::from_str(r#"["active", "Inactive", true, false, "ACTIVE"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                UserStatus::Active,
                UserStatus::Inactive,
                UserStatus::Active,
                UserStatus::Inactive,
                UserStatus::Active,
            ]
        );
        assert!(serde_json::from_str::<UserStatus>(r#""suspended""#).is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserStatus::Inactive).unwrap(), r#""inactive""#);
        assert!(bool::from(UserStatus::Active));
        assert_eq!(UserStatus::from(false), UserStatus::Inactive);
    }

    #[test]
    fn test_department_serde_uses_label() {
        assert_eq!(
            serde_json::to_string(&Department::HumanResources).unwrap(),
            r#""Human Resources""#
        );
    }
}
