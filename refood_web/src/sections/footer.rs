use crate::config::SiteConfig;
use crate::routes::Anchor;
use leptos::prelude::*;

const QUICK_LINKS: &[(Anchor, &str)] = &[
    (Anchor::Home, "Home"),
    (Anchor::About, "About Us"),
    (Anchor::Track, "Track Food"),
    (Anchor::Form, "Donate"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_context::<SiteConfig>().unwrap_or_default().brand;
    let mailto = format!("mailto:{}", brand.contact_email);

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 py-12 grid gap-8 md:grid-cols-3">
                <div>
                    <p class="text-2xl font-extrabold">
                        <span class="text-pink-500">{brand.accent}</span>
                        <span class="text-white">{brand.name}</span>
                    </p>
                    <p class="mt-3 text-sm">"Rescuing surplus food, one plate at a time."</p>
                </div>
                <nav>
                    <h3 class="text-white font-semibold">"Quick Links"</h3>
                    <ul class="mt-3 space-y-2 text-sm">
                        {QUICK_LINKS
                            .iter()
                            .map(|(anchor, label)| {
                                view! {
                                    <li><a href=anchor.href() class="hover:text-pink-400">{*label}</a></li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div>
                    <h3 class="text-white font-semibold">"Contact"</h3>
                    <a href=mailto class="mt-3 block text-sm hover:text-pink-400">{brand.contact_email}</a>
                </div>
            </div>
            <p class="border-t border-gray-800 py-4 text-center text-xs text-gray-500">
                "© 2025 ReFood. All rights reserved."
            </p>
        </footer>
    }
}
