//! Chat input component

use leptos::prelude::*;

/// Single-line message box; Enter sends, Shift+Enter is ignored
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + Clone + 'static,
    /// Whether a reply is pending
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    view! {
        <div class="flex items-center gap-3 p-4 bg-white border-t border-gray-200">
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder="Ask about crops, diseases, or farming tips..."
                class="flex-1 px-4 py-3 border border-gray-300 rounded-full
                       focus:outline-none focus:ring-2 focus:ring-green-500"
            />
            <button
                on:click=move |_| on_submit()
                disabled=move || disabled.get() || value.get().trim().is_empty()
                class="px-5 py-3 bg-green-700 hover:bg-green-800 disabled:bg-gray-300
                       disabled:cursor-not-allowed text-white font-semibold rounded-full transition-colors"
            >
                "Send"
            </button>
        </div>
    }
}
