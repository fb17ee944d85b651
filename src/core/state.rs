//! Form state machine
//!
//! All mutation goes through [`reduce`], which takes the current
//! [`FormState`] and an [`FormEvent`] and returns the next state. The
//! component keeps one `RwSignal<FormState>` and replaces it on every event;
//! [`FormController`] does the same outside the reactive system and drives
//! the async submission.

use super::form::{ErrorMap, Field, FormData, LoginPayload, Mode, RegisterPayload};
use super::submission::{LoginSubmission, SubmitError, SubmitReceipt, Submission, Submitter};
use super::validation::validate;

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(Mode),
    Failed(String),
}

/// Complete state of the auth form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: Mode,
    pub login: LoginPayload,
    pub register: RegisterPayload,
    pub errors: ErrorMap,
    pub remember: bool,
    pub show_password: bool,
    pub status: SubmitStatus,
}

/// User and endpoint events handled by [`reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SwitchMode(Mode),
    Edit { field: Field, value: String },
    SetRemember(bool),
    TogglePasswordVisibility,
    Submit,
    SubmitFinished(Result<SubmitReceipt, SubmitError>),
    DismissFailure,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submission is in flight
    pub fn loading(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Payload of the active mode
    pub fn data(&self) -> FormData<'_> {
        match self.mode {
            Mode::Login => FormData::Login(&self.login),
            Mode::Register => FormData::Register(&self.register),
        }
    }

    /// Current value of a field in the active mode; empty for fields the mode lacks
    pub fn value(&self, field: Field) -> String {
        self.data().get(field).unwrap_or_default().to_string()
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn failure(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Submission for the active payload; login carries the remember flag
    pub fn submission(&self) -> Submission {
        match self.mode {
            Mode::Login => Submission::Login(LoginSubmission {
                payload: self.login.clone(),
                remember: self.remember,
            }),
            Mode::Register => Submission::Register(self.register.clone()),
        }
    }
}

/// Applies one event and returns the next state
pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::SwitchMode(mode) => {
            state.mode = mode;
            state.errors.clear();
            if !state.loading() {
                state.status = SubmitStatus::Idle;
            }
        }
        FormEvent::Edit { field, value } => {
            if state.mode.has_field(field) {
                match state.mode {
                    Mode::Login => state.login.set(field, value),
                    Mode::Register => state.register.set(field, value),
                }
                state.errors.clear_field(field);
            }
        }
        FormEvent::SetRemember(remember) => state.remember = remember,
        FormEvent::TogglePasswordVisibility => state.show_password = !state.show_password,
        FormEvent::Submit => {
            if state.loading() {
                return state;
            }
            state.errors = validate(state.data());
            state.status = if state.errors.is_empty() {
                SubmitStatus::Submitting
            } else {
                SubmitStatus::Idle
            };
        }
        FormEvent::SubmitFinished(result) => {
            if !state.loading() {
                return state;
            }
            state.status = match result {
                Ok(receipt) => SubmitStatus::Succeeded(receipt.mode),
                Err(e) => SubmitStatus::Failed(e.to_string()),
            };
        }
        FormEvent::DismissFailure => {
            if matches!(state.status, SubmitStatus::Failed(_)) {
                state.status = SubmitStatus::Idle;
            }
        }
    }
    state
}

/// Runs `Submit` and returns the submission to send, if validation passed.
///
/// Yields `None` when the payload is invalid or a submission is already in flight.
pub fn begin_submit(state: FormState) -> (FormState, Option<Submission>) {
    if state.loading() {
        return (state, None);
    }
    let state = reduce(state, FormEvent::Submit);
    let submission = state.loading().then(|| state.submission());
    (state, submission)
}

/// Sends one submission, logging a failure; the caller dispatches `SubmitFinished`
pub async fn run_submission<S: Submitter>(
    submitter: &S,
    submission: Submission,
) -> Result<SubmitReceipt, SubmitError> {
    let mode = submission.mode();
    let result = submitter.submit(submission).await;
    if let Err(e) = &result {
        leptos::logging::warn!("{} submission failed: {}", mode, e);
    }
    result
}

/// Owns a [`FormState`] and the endpoint it submits to
pub struct FormController<S> {
    state: FormState,
    submitter: S,
}

impl<S: Submitter> FormController<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            state: FormState::new(),
            submitter,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Validates and, when valid, submits the active payload once.
    ///
    /// Returns `None` when validation failed or a submission was already in flight.
    pub async fn submit(&mut self) -> Option<Result<SubmitReceipt, SubmitError>> {
        let (state, submission) = begin_submit(std::mem::take(&mut self.state));
        self.state = state;

        let result = run_submission(&self.submitter, submission?).await;
        self.dispatch(FormEvent::SubmitFinished(result.clone()));
        Some(result)
    }
}
