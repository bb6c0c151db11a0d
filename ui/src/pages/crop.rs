//! Crop recommendation page

use agrovision_core::{PhRange, RainfallLevel, Season, SoilType, Weather};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::predict_crop;
use crate::components::{LoadingSpinner, SelectField};
use crate::state::AppState;

#[component]
pub fn CropPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let view_state = state.crop;

    let is_loading = Signal::derive(move || view_state.with(|v| v.is_loading()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = match view_state.try_update(|v| v.begin_submit()) {
            Some(Ok(form)) => form,
            Some(Err(e)) => {
                tracing::debug!("Ignoring submit: {}", e);
                return;
            }
            None => return,
        };
        let base_url = state.api_base.get_untracked();
        let ctx = state.ctx.clone();
        spawn_local(async move {
            let response = predict_crop(&base_url, &form).await;
            // Failures are logged by the view and not shown.
            view_state.update(|v| {
                let _ = v.complete(&ctx, response);
            });
        });
    };

    // Select boxes write straight into the form; unknown labels are ignored.
    macro_rules! field {
        ($ty:ident, $field:ident) => {
            view! {
                <SelectField
                    label=$ty::FIELD
                    options=$ty::labels()
                    value=Signal::derive(move || view_state.with(|v| v.form.$field.label()))
                    on_change=move |label: String| {
                        if let Ok(value) = label.parse::<$ty>() {
                            view_state.update(|v| v.form.$field = value);
                        }
                    }
                />
            }
        };
    }

    view! {
        <div class="max-w-6xl mx-auto px-4 py-12 grid md:grid-cols-2 gap-8">
            <form class="bg-white rounded-3xl shadow-lg p-8 space-y-5" on:submit=on_submit>
                <h1 class="text-3xl font-bold text-green-800">"Crop Recommendation"</h1>
                {field!(SoilType, soil_type)}
                {field!(Season, season)}
                {field!(RainfallLevel, rainfall_level)}
                {field!(Weather, weather)}
                {field!(PhRange, ph_range)}
                <button
                    type="submit"
                    disabled=move || is_loading.get()
                    class="w-full py-4 bg-green-700 hover:bg-green-800 disabled:bg-gray-400
                           text-white font-bold rounded-full flex items-center justify-center gap-2"
                >
                    {move || if is_loading.get() {
                        view! { <LoadingSpinner /> "Analyzing..." }.into_any()
                    } else {
                        view! { "Predict Best Crop" }.into_any()
                    }}
                </button>
            </form>

            <div class="bg-white rounded-3xl shadow-lg p-8">
                <h2 class="text-2xl font-bold mb-6">"Recommended Crops"</h2>
                {move || match view_state.with(|v| v.prediction().cloned()) {
                    Some(prediction) => view! {
                        <ol class="space-y-3">
                            {prediction
                                .recommendations
                                .iter()
                                .map(|rec| view! {
                                    <li class="p-4 rounded-xl bg-green-50 font-semibold text-green-900">
                                        {rec.display_line()}
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    }
                    .into_any(),
                    None => view! {
                        <p class="text-gray-500 italic">"Enter soil details to get a recommendation."</p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
