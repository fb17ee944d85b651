use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error line shown under a field
#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <p class="field-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

/// Text input with a visually hidden label and inline error
#[component]
pub fn FormField(
    /// Element id, also used as the input name
    id: &'static str,
    /// Label text (screen readers only)
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Error message, shown when Some
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class="input-base"
                class:input-error=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:input-error=move || error.get().is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "Password")]
    placeholder: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Whether the password is shown as plain text
    #[prop(into)]
    visible: Signal<bool>,
    /// Toggle button callback
    on_toggle: Callback<()>,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="sr-only">{label}</label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    autocomplete=autocomplete
                    class="input-base pr-10"
                    class:input-error=move || error.get().is_some()
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    tabindex="-1"
                    class="absolute inset-y-0 right-2 flex items-center text-gray-500 hover:text-gray-700"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| on_toggle.run(())
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError error=error/>
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    /// Field label text
    label: &'static str,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-gray-900 cursor-pointer">
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300 text-indigo-600"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
