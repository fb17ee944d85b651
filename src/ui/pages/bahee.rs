//! Vigat Bahee ledger page
//!
//! Placeholder view for the ledger reached after signing in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;

#[component]
pub fn BaheePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <img src="/images/vigat-bahee.svg" alt="Vigat Bahee" class="h-20 rounded-full mb-6" />
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Vigat Bahee"</h1>
            <p class="text-gray-600 mb-8">"No entries yet."</p>
            <A href=AppRoute::Auth.path() attr:class="link">
                "Back to sign in"
            </A>
        </main>
    }
}
