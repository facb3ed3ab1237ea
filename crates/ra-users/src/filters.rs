//! User list filters
//!
//! A filter is a conjunction of optional criteria. Unset criteria match
//! every record.

use ra_models::{Department, Role, UserRecord, UserStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilter {
    /// Case-insensitive substring over name, username and email
    pub search: Option<String>,
    pub role: Option<Role>,
    pub department: Option<Department>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.status.is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        if self.role.is_some_and(|role| role != record.role) {
            return false;
        }
        if self.department.is_some_and(|dept| dept != record.department) {
            return false;
        }
        if self.status.is_some_and(|status| status != record.status) {
            return false;
        }

        match self.search_term() {
            None => true,
            Some(term) => [&record.name, &record.username, &record.email]
                .iter()
                .any(|value| value.to_lowercase().contains(&term)),
        }
    }

    /// Matching records, in their original order
    pub fn apply<'a>(&self, records: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
