//! Auth page component
//!
//! Centers the combined login / register form on the page.

use leptos::prelude::*;

use crate::ui::auth::AuthForm;

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <main class="min-h-screen flex items-center justify-center bg-gray-50 py-10 px-4">
            <AuthForm />
        </main>
    }
}
