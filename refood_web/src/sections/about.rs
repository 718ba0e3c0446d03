use leptos::prelude::*;

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900">
                    "About " <span class="text-pink-600">"ReFood"</span>
                </h2>
                <p class="mt-6 text-lg text-gray-600">
                    "Roughly a third of all food produced is never eaten. ReFood is a volunteer-run "
                    "platform that lets donors list surplus meals and groceries, and lets partner NGOs "
                    "claim and collect them while they are still fresh."
                </p>
                <div class="mt-10 grid gap-6 md:grid-cols-3 text-left">
                    <AboutCard
                        title="Donors"
                        description="Restaurants, caterers, events and households list what is left over in under a minute."
                    />
                    <AboutCard
                        title="NGOs"
                        description="Verified partners see nearby donations and schedule pickups that fit their routes."
                    />
                    <AboutCard
                        title="Volunteers"
                        description="Drivers and helpers move food from kitchen to community before it spoils."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-white shadow">
            <h3 class="text-xl font-semibold text-pink-600">{title}</h3>
            <p class="mt-2 text-gray-600">{description}</p>
        </div>
    }
}
