//! Common reusable UI components
//!
//! Form inputs, banners and the loading button shared by the pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{CheckboxField, FormField, PasswordField, TextAreaField};
pub use message::{DismissibleError, SuccessMessage};
pub use spinner::LoadingButton;
