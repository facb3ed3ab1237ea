//! User form controller
//!
//! Owns one form session: the field values, the current validation errors
//! and the submit lifecycle.
//!
//! ```text
//! Idle --submit(invalid)--> Idle (field errors)
//! Idle --submit(valid)----> Submitting --ok----> Idle (form cleared)
//!                                      --error-> Idle (submit error)
//! ```

use ra_contracts::users::validate_user_form;
use ra_core::config::FormConfig;
use ra_core::error::ValidationErrors;
use ra_core::result::AdminResult;
use ra_core::traits::Repository;
use ra_models::{UserPayload, UserRecord};
use tracing::{debug, info, warn};

use crate::host::FormHost;
use crate::state::{FieldUpdate, FormMode, FormState};

/// Submit lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The repository accepted the payload and the host was notified
    Saved(UserRecord),
    /// Validation failed; see [`UserFormController::errors`]
    Invalid,
    /// The repository call failed; see [`UserFormController::submit_error`]
    Failed,
    /// A submission is already in flight
    Busy,
    /// The session was reset or cancelled while the call was in flight
    Stale,
}

/// A validated submission waiting for the repository
///
/// Returned by [`UserFormController::begin_submit`] and consumed by
/// [`UserFormController::complete_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    mode: FormMode,
    payload: UserPayload,
    session: u64,
}

impl SubmitTicket {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn payload(&self) -> &UserPayload {
        &self.payload
    }

    /// Send the payload to the repository: create or update depending on mode
    pub async fn persist<R>(&self, repository: &R) -> AdminResult<UserRecord>
    where
        R: Repository<UserRecord, UserPayload> + ?Sized,
    {
        match self.mode {
            FormMode::Create => repository.create(&self.payload).await,
            FormMode::Edit { id } => repository.update(id, &self.payload).await,
        }
    }
}

/// Create/edit user form
pub struct UserFormController<H: FormHost> {
    config: FormConfig,
    host: H,
    mode: FormMode,
    form: FormState,
    errors: ValidationErrors,
    submit_error: Option<String>,
    state: SubmitState,
    session: u64,
}

impl<H: FormHost> UserFormController<H> {
    /// Start a session in creation mode
    pub fn new(config: FormConfig, host: H) -> Self {
        Self {
            config,
            host,
            mode: FormMode::Create,
            form: FormState::default(),
            errors: ValidationErrors::new(),
            submit_error: None,
            state: SubmitState::Idle,
            session: 0,
        }
    }

    /// Start a session for `user`, or in creation mode when `None`
    pub fn with_user(config: FormConfig, host: H, user: Option<&UserRecord>) -> Self {
        let mut controller = Self::new(config, host);
        controller.initialize(user);
        controller
    }

    /// Reset the form from an existing user or to defaults
    ///
    /// Password fields are always blank afterwards. Errors are cleared and
    /// any in-flight submission is orphaned.
    pub fn initialize(&mut self, user: Option<&UserRecord>) {
        match user {
            Some(record) => {
                self.mode = FormMode::Edit { id: record.id };
                self.form = FormState::from_record(record);
            }
            None => {
                self.mode = FormMode::Create;
                self.form = FormState::default();
            }
        }
        self.errors.clear();
        self.submit_error = None;
        self.state = SubmitState::Idle;
        self.session += 1;

        debug!(mode = ?self.mode, session = self.session, "Initialized user form");
    }

    /// Set a field. An existing error on that field is dropped immediately;
    /// the rest of the form is not re-validated.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let field = self.form.apply(update);
        if self.errors.remove(field.as_str()).is_some() {
            debug!(field = %field, "Cleared field error on edit");
        }
    }

    /// Set a field from a host-supplied name and raw value
    pub fn update_field_str(&mut self, name: &str, value: &str) -> AdminResult<()> {
        let update = FieldUpdate::parse_named(name, value)?;
        self.update_field(update);
        Ok(())
    }

    /// Validate the current values without touching stored errors
    pub fn validate(&self) -> ValidationErrors {
        validate_user_form(&self.form, self.mode.is_edit(), &self.config)
    }

    /// Validate and, if valid, enter `Submitting`
    ///
    /// On `Err` the controller is still `Idle` (or was already busy) and no
    /// repository call should be made.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitOutcome> {
        if self.state == SubmitState::Submitting {
            debug!("Submit ignored while a submission is in flight");
            return Err(SubmitOutcome::Busy);
        }

        self.submit_error = None;
        let errors = self.validate();
        if !errors.is_empty() {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "User form invalid");
            self.errors = errors;
            return Err(SubmitOutcome::Invalid);
        }

        self.errors.clear();
        self.state = SubmitState::Submitting;
        info!(mode = ?self.mode, "Submitting user form");

        Ok(SubmitTicket {
            mode: self.mode,
            payload: self.form.to_payload(self.mode),
            session: self.session,
        })
    }

    /// Finish a submission started with [`begin_submit`](Self::begin_submit)
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: AdminResult<UserRecord>,
    ) -> SubmitOutcome {
        if ticket.session != self.session || self.state != SubmitState::Submitting {
            debug!(
                ticket_session = ticket.session,
                session = self.session,
                "Dropping result of a stale submission"
            );
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(record) => {
                info!(user_id = record.id, mode = ?ticket.mode, "User saved");
                self.host.on_submit(&ticket.payload);
                self.reset();
                SubmitOutcome::Saved(record)
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), mode = ?ticket.mode, "Failed to save user");
                self.submit_error = Some(self.config.submit_failed_message.clone());
                self.state = SubmitState::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, persist through `repository`, and notify the host
    pub async fn submit<R>(&mut self, repository: &R) -> SubmitOutcome
    where
        R: Repository<UserRecord, UserPayload> + ?Sized,
    {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(outcome) => return outcome,
        };

        let result = ticket.persist(repository).await;
        self.complete_submit(ticket, result)
    }

    /// Abandon the form. Nothing is validated.
    pub fn cancel(&mut self) {
        debug!(mode = ?self.mode, "User form cancelled");
        self.host.on_cancel();
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.form = FormState::default();
        self.errors.clear();
        self.submit_error = None;
        self.state = SubmitState::Idle;
        self.session += 1;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
