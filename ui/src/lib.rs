//! AgroVision web app
//!
//! Browser front end for the AgroVision backend. View state comes from
//! `agrovision-core`; this crate renders it and performs the HTTP calls.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::{Footer, Navbar};
use pages::{chatbot::ChatbotPage, crop::CropPage, diseases::DiseasesPage, landing::LandingPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title text="AgroVision AI" />
        <Router>
            <div class="min-h-screen flex flex-col bg-green-50 text-gray-800">
                <Navbar />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=LandingPage />
                        <Route path=path!("/crop") view=CropPage />
                        <Route path=path!("/diseases") view=DiseasesPage />
                        <Route path=path!("/chatbot") view=ChatbotPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="py-32 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-green-700/40 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-green-700 hover:bg-green-800 text-white rounded-full font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
