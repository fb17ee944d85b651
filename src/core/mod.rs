//! Core domain models and business logic for the auth form

#[cfg(feature = "ssr")]
pub mod config;
mod form;
mod routes;
mod state;
mod submission;
#[cfg(test)]
pub(crate) mod testing;
pub mod validation;

pub use form::*;
pub use routes::AppRoute;
pub use state::{
    FormController, FormEvent, FormState, SubmitStatus, begin_submit, reduce, run_submission,
};
pub use submission::{
    DEFAULT_SUBMIT_DELAY_MS, DelayedSubmitter, LoginSubmission, SubmitError, SubmitReceipt,
    Submission, Submitter,
};
