//! Submission endpoint seam
//!
//! The form hands a validated [`Submission`] to a [`Submitter`] and waits for
//! it to resolve. [`DelayedSubmitter`] is the stand-in endpoint: it waits a
//! fixed delay, logs the payload without the password and succeeds.

use std::future::Future;

use serde::Serialize;

use super::form::{LoginPayload, Mode, RegisterPayload};

/// Default delay of the stand-in endpoint
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 800;

/// Validated payload sent to the endpoint, serialized as `{mode, payload}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "payload", rename_all = "lowercase")]
pub enum Submission {
    Login(LoginSubmission),
    Register(RegisterPayload),
}

/// Login payload plus the remember-me flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginSubmission {
    #[serde(flatten)]
    pub payload: LoginPayload,
    pub remember: bool,
}

impl Submission {
    pub fn mode(&self) -> Mode {
        match self {
            Submission::Login(_) => Mode::Login,
            Submission::Register(_) => Mode::Register,
        }
    }
}

/// Acknowledgement from the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub mode: Mode,
}

/// Submission failure shown to the user as a dismissible banner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),

    #[error("The service is unavailable, please try again later")]
    Unavailable,
}

/// Accepts a validated submission and resolves asynchronously
pub trait Submitter {
    fn submit(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<SubmitReceipt, SubmitError>>;
}

/// Stand-in endpoint: sleeps, logs and always succeeds
#[derive(Debug, Clone, Copy)]
pub struct DelayedSubmitter {
    pub delay_ms: u32,
}

impl Default for DelayedSubmitter {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl DelayedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Submitter for DelayedSubmitter {
    async fn submit(&self, submission: Submission) -> Result<SubmitReceipt, SubmitError> {
        sleep_ms(self.delay_ms).await;

        match serde_json::to_string(&submission) {
            Ok(json) => leptos::logging::log!("{} {}", submission.mode(), json),
            Err(e) => leptos::logging::warn!("Failed to serialize submission: {}", e),
        }

        Ok(SubmitReceipt {
            mode: submission.mode(),
        })
    }
}

#[cfg(feature = "hydrate")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
async fn sleep_ms(_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_submission() -> Submission {
        Submission::Login(LoginSubmission {
            payload: LoginPayload {
                email: "user@example.com".to_string(),
                password: "secret".to_string(),
            },
            remember: true,
        })
    }

    #[test]
    fn test_submission_json_shape() {
        let json = serde_json::to_value(login_submission()).unwrap();
        assert_eq!(json["mode"], "login");
        assert_eq!(json["payload"]["email"], "user@example.com");
        assert_eq!(json["payload"]["remember"], true);
        assert!(json["payload"].get("password").is_none());
    }

    #[test]
    fn test_register_submission_json_shape() {
        let submission = Submission::Register(RegisterPayload {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 Lake Rd".to_string(),
            password: "123456".to_string(),
        });
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["mode"], "register");
        assert_eq!(json["payload"]["address"], "12 Lake Rd");
        assert!(json["payload"].get("password").is_none());
        assert_eq!(submission.mode(), Mode::Register);
    }

    #[tokio::test]
    async fn test_delayed_submitter_succeeds() {
        let submitter = DelayedSubmitter::new(1);
        let receipt = submitter.submit(login_submission()).await;
        assert_eq!(receipt, Ok(SubmitReceipt { mode: Mode::Login }));
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::Rejected("Email already registered".to_string()).to_string(),
            "Email already registered"
        );
        assert!(SubmitError::Unavailable.to_string().contains("unavailable"));
    }
}
