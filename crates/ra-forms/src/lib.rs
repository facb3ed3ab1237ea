//! # ra-forms
//!
//! The create/edit user form: field state, validation and the submit
//! lifecycle.
//!
//! The controller never talks to storage on its own. It validates, builds a
//! sanitized [`UserPayload`](ra_models::UserPayload), hands it to the
//! repository it is given, and reports the outcome to its [`FormHost`].

pub mod controller;
pub mod host;
pub mod state;

pub use controller::{SubmitOutcome, SubmitState, SubmitTicket, UserFormController};
pub use host::{FnHost, FormHost};
pub use state::{FieldUpdate, FormMode, FormState};
