use leptos::prelude::*;

/// Donation lifecycle as shown on the tracking timeline.
const STAGES: &[(&str, &str)] = &[
    ("Listed", "The donor describes the food, quantity and pickup window."),
    ("Claimed", "A nearby NGO accepts the donation and confirms a pickup slot."),
    ("Picked Up", "A volunteer collects the food and checks its condition."),
    ("Delivered", "Meals reach the shelter, kitchen or community fridge."),
];

#[component]
pub fn FoodTracking() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900">
                    "Follow Every " <span class="text-pink-600">"Donation"</span>
                </h2>
                <p class="mt-4 text-center text-gray-600 max-w-2xl mx-auto">
                    "Each donation moves through four stages, so donors always know where their food went."
                </p>
                <ol class="mt-12 grid gap-8 md:grid-cols-4">
                    {STAGES
                        .iter()
                        .enumerate()
                        .map(|(idx, (title, detail))| {
                            view! {
                                <li class="relative p-6 rounded-xl border border-pink-100 bg-pink-50/50">
                                    <span class="flex items-center justify-center w-10 h-10 rounded-full bg-pink-600 text-white font-bold">
                                        {idx + 1}
                                    </span>
                                    <h3 class="mt-4 text-lg font-semibold text-gray-900">{*title}</h3>
                                    <p class="mt-2 text-sm text-gray-600">{*detail}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
