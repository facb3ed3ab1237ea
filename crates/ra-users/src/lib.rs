//! # ra-users
//!
//! The list side of the user management screen: search and filters,
//! aggregate statistics, row selection and bulk actions.

pub mod bulk;
pub mod filters;
pub mod selection;
pub mod stats;

pub use bulk::{apply_bulk, BulkAction, BulkReport};
pub use filters::UserFilter;
pub use selection::Selection;
pub use stats::UserStats;
