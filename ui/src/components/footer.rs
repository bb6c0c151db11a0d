//! Page footer

use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-green-900 text-green-100 mt-16">
            <div class="max-w-7xl mx-auto px-4 py-10 flex flex-col md:flex-row justify-between gap-6">
                <div>
                    <h3 class="text-xl font-bold text-white">"AgroVision AI 🌱"</h3>
                    <p class="text-sm mt-2 max-w-sm">
                        "Empowering farmers with cutting-edge AI technology for a sustainable future."
                    </p>
                </div>
                <div class="flex gap-6 text-sm">
                    <a href="#" class="hover:text-white">"Privacy Policy"</a>
                    <a href="#" class="hover:text-white">"Terms of Service"</a>
                    <a href="#" class="hover:text-white">"Contact Support"</a>
                </div>
            </div>
            <div class="border-t border-green-800 py-4 text-center text-xs">
                {format!("© {} AgroVision AI. All rights reserved.", year)}
            </div>
        </footer>
    }
}
