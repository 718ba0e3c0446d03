use leptos::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("120K+", "Meals shared"),
    ("350+", "Partner NGOs"),
    ("48 t", "Food rescued"),
    ("2,000+", "Volunteers"),
];

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="py-16 bg-pink-600 text-white">
            <div class="container mx-auto px-4 grid gap-8 grid-cols-2 md:grid-cols-4 text-center">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div>
                                <p class="text-4xl font-extrabold">{*value}</p>
                                <p class="mt-2 text-pink-100">{*label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
