//! Disease detection page

use agrovision_core::image_content_type;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement, Url};

use crate::api::predict_disease;
use crate::components::LoadingSpinner;
use crate::state::AppState;

fn release_preview(url: Option<String>) {
    if let Some(url) = url {
        let _ = Url::revoke_object_url(&url);
    }
}

#[component]
pub fn DiseasesPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let view_state = state.disease;
    // Only shown for files rejected before any request is made.
    let upload_error = RwSignal::new(Option::<String>::None);

    let is_loading = Signal::derive(move || view_state.with(|v| v.is_loading()));
    let has_image = Signal::derive(move || view_state.with(|v| v.image().is_some()));

    let select_file = move |file: File| {
        if let Err(e) = image_content_type(&file.name()) {
            upload_error.set(Some(e.to_string()));
            return;
        }
        let preview = Url::create_object_url_with_blob(&file).ok();
        release_preview(view_state.try_update(|v| v.select_image(file, preview)).flatten());
        upload_error.set(None);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            select_file(file);
        }
    };

    let on_detect = move |_| {
        let file = match view_state.try_update(|v| v.begin_submit().cloned()) {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                tracing::debug!("Ignoring detect: {}", e);
                return;
            }
            None => return,
        };

        let base_url = state.api_base.get_untracked();
        let ctx = state.ctx.clone();
        spawn_local(async move {
            let response = predict_disease(&base_url, &file).await;
            // Failures are logged by the view and not shown.
            view_state.update(|v| {
                let _ = v.complete(&ctx, response);
            });
        });
    };

    let on_reset = move |_| {
        release_preview(view_state.try_update(|v| v.new_prediction()).flatten());
        upload_error.set(None);
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-green-800 mb-8 text-center">"Plant Disease Detection"</h1>

            <label
                class="block border-4 border-dashed border-green-300 rounded-3xl bg-white p-10
                       text-center cursor-pointer hover:border-green-500 transition-colors"
                on:dragover=|ev: DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                <input type="file" accept=".jpg,.jpeg,.png" class="hidden" on:change=on_file_change />
                {move || match view_state.with(|v| v.preview().map(str::to_string)) {
                    Some(src) => view! {
                        <img src=src alt="Selected leaf" class="mx-auto max-h-80 rounded-xl" />
                    }
                    .into_any(),
                    None => view! {
                        <div class="space-y-2">
                            <p class="text-5xl">"📷"</p>
                            <p class="text-lg font-semibold">"Click or Drag to Upload Image"</p>
                            <p class="text-sm text-gray-500">"Supported formats: JPG, PNG"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </label>

            {move || upload_error.get().map(|e| view! {
                <p class="mt-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">{e}</p>
            })}

            <div class="mt-6 flex justify-center gap-4">
                <button
                    on:click=on_detect
                    disabled=move || !has_image.get() || is_loading.get()
                    class="px-8 py-4 bg-green-700 hover:bg-green-800 disabled:bg-gray-400
                           text-white font-bold rounded-full flex items-center gap-2"
                >
                    {move || if is_loading.get() {
                        view! { <LoadingSpinner /> "Analyzing..." }.into_any()
                    } else {
                        view! { "Detect Disease" }.into_any()
                    }}
                </button>
            </div>

            {move || view_state.with(|v| v.result().cloned()).map(|result| view! {
                <div class="mt-8 bg-white rounded-3xl shadow-lg p-8">
                    <h2 class="text-2xl font-bold mb-4">"Analysis Result"</h2>
                    <dl class="space-y-2">
                        {result
                            .display_rows()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="flex justify-between border-b border-gray-100 py-2">
                                    <dt class="text-gray-500">{label}</dt>
                                    <dd class="font-semibold">{value}</dd>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                    <button
                        on:click=on_reset
                        class="mt-6 px-6 py-3 border border-green-700 text-green-700 rounded-full font-semibold"
                    >
                        "New Prediction"
                    </button>
                </div>
            })}
        </div>
    }
}
