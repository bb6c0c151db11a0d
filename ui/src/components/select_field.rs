//! Labelled select box for one crop form field

use leptos::prelude::*;

#[component]
pub fn SelectField(
    /// Field label shown above the box
    label: &'static str,
    /// Allowed values, in display order
    options: Vec<&'static str>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<&'static str>,
    /// Called with the newly selected label
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-semibold text-gray-700 mb-1">{label}</span>
            <select
                class="w-full px-4 py-3 border border-gray-300 rounded-lg bg-white
                       focus:outline-none focus:ring-2 focus:ring-green-500"
                on:change=move |ev| on_change(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
