use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Submit button that swaps its content for a spinner while loading
#[component]
pub fn LoadingButton(
    /// Whether the action is in progress; also disables the button
    #[prop(into)]
    loading: Signal<bool>,
    /// Text shown while loading
    #[prop(default = "Please wait…")]
    loading_text: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content when idle
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("btn-primary {}", class)
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show
                when=move || loading.get()
                fallback=move || children()
            >
                <span class="flex items-center justify-center">
                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                    {loading_text}
                </span>
            </Show>
        </button>
    }
}
