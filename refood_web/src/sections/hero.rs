use crate::routes::Anchor;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="pt-28 pb-20 bg-gradient-to-br from-pink-50 via-white to-rose-100">
            <div class="container mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-block mb-4 px-3 py-1 rounded-full bg-pink-100 text-pink-700 text-sm font-semibold">
                        "Zero Hunger, Zero Waste"
                    </span>
                    <h1 class="text-4xl md:text-5xl font-extrabold text-gray-900 leading-tight">
                        "Surplus food, "
                        <span class="text-pink-600">"shared"</span>
                        " with those who need it."
                    </h1>
                    <p class="mt-6 text-lg text-gray-600">
                        "ReFood connects restaurants, caterers and households with local NGOs "
                        "so good food reaches a plate instead of a bin."
                    </p>
                    <div class="mt-8 flex flex-wrap gap-4">
                        <a href=Anchor::Form.href() class="px-6 py-3 rounded-lg bg-pink-600 text-white font-semibold shadow hover:bg-pink-700 transition-colors">
                            "Donate Food"
                        </a>
                        <a href=Anchor::Track.href() class="px-6 py-3 rounded-lg border border-pink-600 text-pink-600 font-semibold hover:bg-pink-50 transition-colors">
                            "Track a Donation"
                        </a>
                    </div>
                </div>
                <div class="hidden md:flex justify-center">
                    <div class="w-80 h-80 rounded-full bg-pink-200/60 flex items-center justify-center text-7xl">
                        "🍲"
                    </div>
                </div>
            </div>
        </section>
    }
}
