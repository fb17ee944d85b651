//! Test doubles shared by the core and UI tests

use std::cell::{Cell, RefCell};

use leptos::prelude::*;

use super::form::Mode;
use super::state::FormState;
use super::submission::{SubmitError, SubmitReceipt, Submission, Submitter};

/// Submitter that counts calls, keeps the last submission and returns a fixed result.
///
/// When `watched` is set, each call records whether that form state was loading
/// at the moment the endpoint was reached.
pub(crate) struct RecordingSubmitter {
    pub calls: Cell<usize>,
    pub last: RefCell<Option<Submission>>,
    pub loading_during_call: Cell<Option<bool>>,
    pub watched: Option<RwSignal<FormState>>,
    result: Result<SubmitReceipt, SubmitError>,
}

impl RecordingSubmitter {
    pub fn succeeding(mode: Mode) -> Self {
        Self::returning(Ok(SubmitReceipt { mode }))
    }

    pub fn failing(error: SubmitError) -> Self {
        Self::returning(Err(error))
    }

    fn returning(result: Result<SubmitReceipt, SubmitError>) -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
            loading_during_call: Cell::new(None),
            watched: None,
            result,
        }
    }

    pub fn watching(mut self, state: RwSignal<FormState>) -> Self {
        self.watched = Some(state);
        self
    }
}

impl Submitter for RecordingSubmitter {
    async fn submit(&self, submission: Submission) -> Result<SubmitReceipt, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(submission);
        if let Some(state) = self.watched {
            self.loading_during_call
                .set(state.try_with_untracked(FormState::loading));
        }
        tokio::task::yield_now().await;
        self.result.clone()
    }
}
