//! Authentication UI module
//!
//! The combined sign-in / registration form.

mod auth_form;

pub use auth_form::AuthForm;
