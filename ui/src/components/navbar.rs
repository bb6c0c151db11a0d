//! Navigation bar

use agrovision_core::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Top navigation with one link per page and a mobile menu toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let link_class = move |route: Route| {
        let active = route.is_active(&pathname.get());
        format!(
            "px-3 py-2 rounded-md font-medium transition-colors {}",
            if active {
                "bg-green-100 text-green-800"
            } else {
                "text-gray-600 hover:text-green-700"
            }
        )
    };

    let links = move || {
        Route::ALL
            .into_iter()
            .map(|route| {
                view! {
                    <a
                        href=route.path()
                        class=move || link_class(route)
                        on:click=move |_| menu_open.set(false)
                    >
                        {route.label()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-green-700">"AgroVision AI 🌱"</a>

                <div class="hidden md:flex items-center gap-2">{links}</div>

                <button
                    class="md:hidden p-2 text-gray-600"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-1 px-4 pb-4">{links}</div>
            </Show>
        </nav>
    }
}
