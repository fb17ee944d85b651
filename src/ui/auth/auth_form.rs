//! Combined sign-in / registration form
//!
//! The whole form lives in one `RwSignal<FormState>`; every handler turns
//! the DOM event into a [`FormEvent`] and runs it through [`reduce`].

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    DEFAULT_SUBMIT_DELAY_MS, DelayedSubmitter, Field, FormEvent, FormState, Mode, SubmitStatus,
    Submission, Submitter, begin_submit, reduce, run_submission,
};
use crate::ui::common::{
    CheckboxField, DismissibleError, FormField, LoadingButton, PasswordField, SuccessMessage,
    TextAreaField,
};
use crate::ui::icon::{Icon, icons};

fn heading(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Sign in to your account",
        Mode::Register => "Create a new account",
    }
}

fn success_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Signed in successfully",
        Mode::Register => "Account created successfully",
    }
}

/// Runs an event through the reducer; false once the form has been unmounted
fn apply(state: RwSignal<FormState>, event: FormEvent) -> bool {
    state
        .try_update(|s| *s = reduce(std::mem::take(s), event))
        .is_some()
}

/// Validates and marks the form as submitting; returns the payload to send
fn start_submission(state: RwSignal<FormState>) -> Option<Submission> {
    state
        .try_update(|s| {
            let (next, submission) = begin_submit(std::mem::take(s));
            *s = next;
            submission
        })
        .flatten()
}

/// Sends the payload and writes the outcome back.
///
/// Returns false when the form was unmounted while waiting; the outcome is dropped.
async fn finish_submission<S: Submitter>(
    state: RwSignal<FormState>,
    submitter: &S,
    submission: Submission,
) -> bool {
    let result = run_submission(submitter, submission).await;
    apply(state, FormEvent::SubmitFinished(result))
}

/// Login / register form with client-side validation
#[component]
pub fn AuthForm(
    /// Delay of the stand-in submission endpoint
    #[prop(default = DEFAULT_SUBMIT_DELAY_MS)]
    submit_delay_ms: u32,
) -> impl IntoView {
    let state = RwSignal::new(FormState::new());
    let submitter = DelayedSubmitter::new(submit_delay_ms);

    let dispatch = move |event: FormEvent| {
        apply(state, event);
    };

    let mode = Signal::derive(move || state.with(|s| s.mode));
    let loading = Signal::derive(move || state.with(FormState::loading));
    let is_login = move || mode.get() == Mode::Login;

    let field_value = move |field: Field| Signal::derive(move || state.with(|s| s.value(field)));
    let field_error = move |field: Field| Signal::derive(move || state.with(|s| s.error(field)));
    let on_edit = move |field: Field| {
        Callback::new(move |value: String| dispatch(FormEvent::Edit { field, value }))
    };

    let failure = Signal::derive(move || state.with(FormState::failure));
    let success = Signal::derive(move || {
        state.with(|s| match s.status {
            SubmitStatus::Succeeded(done) => Some(success_message(done).to_string()),
            _ => None,
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(submission) = start_submission(state) {
            spawn_local(async move {
                finish_submission(state, &submitter, submission).await;
            });
        }
    };

    view! {
        <div class="w-full max-w-md space-y-8">
            <img src="/images/vigat-bahee.svg" alt="Vigat Bahee" class="h-20 rounded-full mx-auto" />

            <header class="text-center">
                <h2 class="text-3xl font-bold text-gray-900">{move || heading(mode.get())}</h2>
                <p class="mt-2 text-sm text-gray-600">
                    {move || if is_login() { "Or " } else { "Already have an account? " }}
                    <button
                        type="button"
                        class="link"
                        on:click=move |_| dispatch(FormEvent::SwitchMode(mode.get_untracked().other()))
                    >
                        {move || if is_login() { "create a new account" } else { "Back to sign in" }}
                    </button>
                </p>
            </header>

            <DismissibleError
                error=failure
                on_dismiss=Callback::new(move |_| dispatch(FormEvent::DismissFailure))
            />
            <SuccessMessage message=success />

            <form on:submit=on_submit class="space-y-6" novalidate>
                <Show when=move || !is_login()>
                    <FormField
                        id=Field::Name.as_str()
                        label="Name"
                        placeholder=Field::Name.placeholder()
                        autocomplete="name"
                        value=field_value(Field::Name)
                        on_input=on_edit(Field::Name)
                        error=field_error(Field::Name)
                    />
                </Show>

                <FormField
                    id=Field::Email.as_str()
                    label="Email"
                    input_type="email"
                    placeholder=Field::Email.placeholder()
                    autocomplete="email"
                    value=field_value(Field::Email)
                    on_input=on_edit(Field::Email)
                    error=field_error(Field::Email)
                />

                <Show when=move || !is_login()>
                    <TextAreaField
                        id=Field::Address.as_str()
                        label="Address"
                        placeholder=Field::Address.placeholder()
                        value=field_value(Field::Address)
                        on_input=on_edit(Field::Address)
                        error=field_error(Field::Address)
                    />
                </Show>

                <PasswordField
                    id=Field::Password.as_str()
                    label="Password"
                    placeholder=Field::Password.placeholder()
                    value=field_value(Field::Password)
                    on_input=on_edit(Field::Password)
                    visible=Signal::derive(move || state.with(|s| s.show_password))
                    on_toggle=Callback::new(move |_| dispatch(FormEvent::TogglePasswordVisibility))
                    error=field_error(Field::Password)
                />

                <Show when=is_login>
                    <div class="flex items-center justify-between">
                        <CheckboxField
                            label="Remember me"
                            checked=Signal::derive(move || state.with(|s| s.remember))
                            on_change=Callback::new(move |checked| dispatch(FormEvent::SetRemember(checked)))
                        />
                        <button
                            type="button"
                            class="link text-sm"
                            on:click=move |_| leptos::logging::log!("Forgot password")
                        >
                            "Forgot your password?"
                        </button>
                    </div>
                </Show>

                <LoadingButton loading=loading class="w-full">
                    <Show when=is_login fallback=|| "Register">
                        <Icon name=icons::SIGN_IN class="mr-2 h-4 w-4" />
                        "Sign in"
                    </Show>
                </LoadingButton>
            </form>
        </div>
    }
}
