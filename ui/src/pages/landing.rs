//! Landing page

use agrovision_core::Route;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-br from-green-200 via-green-100 to-yellow-50">
            <div class="max-w-7xl mx-auto px-4 py-24 flex flex-col md:flex-row items-center gap-12">
                <div class="md:w-1/2 text-center md:text-left">
                    <span class="inline-block py-1 px-3 rounded-full bg-white/60 text-sm font-semibold mb-4">
                        "🚀 The Future of Agriculture"
                    </span>
                    <h1 class="text-5xl md:text-6xl font-extrabold mb-6 leading-tight">
                        "Smart Farming with AI Intelligence"
                    </h1>
                    <p class="text-lg mb-8 max-w-lg">
                        "Maximize your yield with AI-powered crop recommendations, instant disease detection, and 24/7 expert farming assistance."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <a
                            href=Route::Crop.path()
                            class="bg-yellow-400 hover:bg-yellow-300 font-bold py-4 px-8 rounded-full shadow-lg"
                        >
                            "Get Started →"
                        </a>
                        <a
                            href=Route::Chatbot.path()
                            class="bg-white/60 border border-green-700/30 font-bold py-4 px-8 rounded-full"
                        >
                            "Talk to AI"
                        </a>
                    </div>
                </div>
                <div class="md:w-1/2 grid grid-cols-2 gap-4">
                    <StatCard icon="🌿" title="Crop Health" value="98% Optimal" />
                    <StatCard icon="🤖" title="AI Assistant" value="Active Now" />
                </div>
            </div>
        </section>

        <section class="max-w-7xl mx-auto px-4 py-20">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold mb-4">"Why Choose AgroVision AI?"</h2>
                <p class="text-gray-600 max-w-2xl mx-auto">
                    "We combine advanced machine learning with agricultural expertise to help you make data-driven decisions."
                </p>
            </div>
            <div class="grid md:grid-cols-3 gap-8">
                <FeatureCard
                    icon="🌱"
                    title="Smart Crop Recommendation"
                    description="Analyze soil nutrients (NPK), weather conditions, and rainfall to find the perfect crop for your land."
                    route=Route::Crop
                />
                <FeatureCard
                    icon="🔬"
                    title="Instant Disease Detection"
                    description="Simply upload a photo of a plant leaf. Our AI instantly identifies diseases and suggests treatments."
                    route=Route::Diseases
                />
                <FeatureCard
                    icon="💬"
                    title="24/7 AI Farmer Assistant"
                    description="Have a question? Chat with our intelligent assistant about farming tips, market trends, and more."
                    route=Route::Chatbot
                />
            </div>
        </section>
    }
}

#[component]
fn StatCard(icon: &'static str, title: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/80 rounded-2xl shadow p-6 flex items-center gap-4">
            <span class="text-3xl">{icon}</span>
            <div>
                <p class="text-sm text-gray-500">{title}</p>
                <p class="font-bold text-green-700">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    route: Route,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-3xl shadow-lg p-8 hover:shadow-2xl transition-shadow">
            <div class="text-4xl mb-6">{icon}</div>
            <h3 class="text-2xl font-bold mb-4">{title}</h3>
            <p class="text-gray-600 mb-8 leading-relaxed">{description}</p>
            <a href=route.path() class="text-green-700 font-bold hover:text-green-900">
                "Try Feature →"
            </a>
        </div>
    }
}
