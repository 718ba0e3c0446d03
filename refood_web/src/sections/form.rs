use leptos::prelude::*;

const FOOD_TYPES: &[&str] = &["Cooked meals", "Packaged food", "Fresh produce", "Bakery", "Dairy"];

/// Donation form markup. Submission is not wired up; the button is inert.
#[component]
pub fn FoodSpecificationForm() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 max-w-2xl">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900">
                    "Donate " <span class="text-pink-600">"Food"</span>
                </h2>
                <form class="mt-10 p-8 bg-white rounded-xl shadow space-y-6">
                    <div>
                        <label for="food-type" class="block text-sm font-medium text-gray-700">"Food type"</label>
                        <select id="food-type" name="food-type" class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2">
                            {FOOD_TYPES.iter().map(|kind| view! { <option>{*kind}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="grid gap-6 md:grid-cols-2">
                        <div>
                            <label for="quantity" class="block text-sm font-medium text-gray-700">"Quantity (servings)"</label>
                            <input id="quantity" name="quantity" type="number" min="1" class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" />
                        </div>
                        <div>
                            <label for="expiry" class="block text-sm font-medium text-gray-700">"Best before"</label>
                            <input id="expiry" name="expiry" type="datetime-local" class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" />
                        </div>
                    </div>
                    <div>
                        <label for="address" class="block text-sm font-medium text-gray-700">"Pickup address"</label>
                        <textarea id="address" name="address" rows="3" class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"></textarea>
                    </div>
                    <button type="button" class="w-full py-3 rounded-lg bg-pink-600 text-white font-semibold hover:bg-pink-700 transition-colors">
                        "List Donation"
                    </button>
                </form>
            </div>
        </section>
    }
}
