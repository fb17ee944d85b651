//! Application pages module
//!
//! - Auth page (login / register) at `/`
//! - Vigat Bahee page at `/bahee`
//! - Not found page for everything else

mod auth;
mod bahee;
mod not_found;

pub use auth::AuthPage;
pub use bahee::BaheePage;
pub use not_found::NotFoundPage;
