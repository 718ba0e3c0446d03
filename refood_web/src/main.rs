// ReFood Landing Page - Leptos 0.8 Edition
// Developed by The ReFood Team (c)2025

use leptos::prelude::*;
use refood_web::{App, SiteConfig, logging};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::load_embedded();
    logging::init(config.logging.max_level());
    if let Some(err) = config_error {
        tracing::warn!(%err, "falling back to default site config");
    }
    tracing::info!(
        breakpoint = config.layout.desktop_breakpoint,
        "mounting ReFood landing page"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
