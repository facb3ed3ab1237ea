//! Aggregate statistics shown above the user table

use ra_models::{Department, Role, UserRecord};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Every role is present, zero when unused
    pub by_role: BTreeMap<Role, usize>,
    /// Only departments that occur
    pub by_department: BTreeMap<Department, usize>,
}

impl UserStats {
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a UserRecord>,
    {
        let mut stats = Self {
            by_role: Role::ALL.into_iter().map(|role| (role, 0)).collect(),
            ..Self::default()
        };

        for record in records {
            stats.total += 1;
            if record.is_active() {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            *stats.by_role.entry(record.role).or_default() += 1;
            *stats.by_department.entry(record.department).or_default() += 1;
        }

        stats
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.by_role.get(&role).copied().unwrap_or(0)
    }

    pub fn department_count(&self, department: Department) -> usize {
        self.by_department.get(&department).copied().unwrap_or(0)
    }
}
