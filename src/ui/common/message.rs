//! Banner components for submission outcomes.

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error banner with a dismiss button
/// Shows when the signal holds a message
#[component]
pub fn DismissibleError(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called when the close button is clicked
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span class="flex-1">{move || error.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="ml-2 text-red-500 hover:text-red-700"
                    title="Dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    <Icon name=icons::X class="h-4 w-4"/>
                </button>
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
