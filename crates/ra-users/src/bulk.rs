//! Bulk actions over selected users

use ra_core::error::AdminError;
use ra_core::traits::{Id, Repository};
use ra_models::{UserPayload, UserRecord, UserStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Activate,
    Deactivate,
    Delete,
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkAction::Activate => f.write_str("activate"),
            BulkAction::Deactivate => f.write_str("deactivate"),
            BulkAction::Delete => f.write_str("delete"),
        }
    }
}

/// Per-record outcome of a bulk action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub succeeded: Vec<Id>,
    /// Failed ids with the error message
    pub failed: Vec<(Id, String)>,
}

impl BulkReport {
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Apply `action` to every selected record, one at a time
///
/// A failing record is reported and the batch continues. Selected ids not
/// present in `records` fail with a not-found error.
pub async fn apply_bulk<R>(
    repository: &R,
    action: BulkAction,
    records: &[UserRecord],
    selection: &Selection,
) -> BulkReport
where
    R: Repository<UserRecord, UserPayload> + ?Sized,
{
    let mut report = BulkReport::default();

    for id in selection.ids() {
        let result = match records.iter().find(|r| r.id == id) {
            None => Err(AdminError::NotFound { entity: "User", id }),
            Some(record) => apply_one(repository, action, record).await,
        };

        match result {
            Ok(()) => report.succeeded.push(id),
            Err(e) => {
                warn!(user_id = id, action = %action, error = %e, "Bulk action failed for user");
                report.failed.push((id, e.to_string()));
            }
        }
    }

    info!(
        action = %action,
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "Bulk action finished"
    );

    report
}

async fn apply_one<R>(repository: &R, action: BulkAction, record: &UserRecord) -> Result<(), AdminError>
where
    R: Repository<UserRecord, UserPayload> + ?Sized,
{
    match action {
        BulkAction::Activate => set_status(repository, record, UserStatus::Active).await,
        BulkAction::Deactivate => set_status(repository, record, UserStatus::Inactive).await,
        BulkAction::Delete => repository.delete(record.id).await,
    }
}

async fn set_status<R>(repository: &R, record: &UserRecord, status: UserStatus) -> Result<(), AdminError>
where
    R: Repository<UserRecord, UserPayload> + ?Sized,
{
    let payload = UserPayload::from_record(record).with_status(status);
    repository.update(record.id, &payload).await?;
    Ok(())
}
