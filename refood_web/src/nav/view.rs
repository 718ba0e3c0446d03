use leptos::ev;
use leptos::html::Li;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

use super::links::{DESKTOP_LINKS, MOBILE_LINKS, NavLink, ROLE_LINKS};
use super::listeners::Subscription;
use super::state::{Breakpoint, Containment, NavState};
use crate::config::SiteConfig;

/// Three bars.
const OPEN_GLYPH: &str = "M4 6h16M4 12h16M4 18h16";
/// Cross.
const CLOSE_GLYPH: &str = "M6 18L18 6M6 6l12 12";

fn hamburger_glyph(menu_open: bool) -> &'static str {
    if menu_open { CLOSE_GLYPH } else { OPEN_GLYPH }
}

fn hamburger_label(menu_open: bool) -> &'static str {
    if menu_open { "Close Menu" } else { "Open Menu" }
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "text-base font-medium transition-colors duration-300 hover:text-pink-600 text-pink-600 border-b-2 border-pink-600"
    } else {
        "text-base font-medium transition-colors duration-300 hover:text-pink-600 text-gray-800"
    }
}

/// Where a pointer-down target sits relative to the dropdown region.
fn containment_of(region: Option<web_sys::HtmlLiElement>, target: Option<web_sys::EventTarget>) -> Containment {
    let Some(region) = region else {
        return Containment::Unattached;
    };
    let node = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    if region.contains(node.as_ref()) {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

fn viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let breakpoint: Breakpoint = config.layout.breakpoint();
    let brand = config.brand;

    let state = RwSignal::new(NavState::default());
    let dropdown_open = Memo::new(move |_| state.get().dropdown_open());
    let mobile_menu_open = Memo::new(move |_| state.get().mobile_menu_open());
    let dropdown_ref = NodeRef::<Li>::new();

    let mut pointer = Subscription::new(
        "mousedown",
        window_event_listener(ev::mousedown, move |event| {
            let containment = containment_of(dropdown_ref.get_untracked(), event.target());
            state.maybe_update(|s| {
                let closed = s.handle_outside_click(containment);
                if closed {
                    tracing::debug!("dropdown dismissed by outside pointer-down");
                }
                closed
            });
        }),
    );
    let mut resize = Subscription::new(
        "resize",
        window_event_listener(ev::resize, move |_| {
            let Some(width) = viewport_width() else {
                return;
            };
            state.maybe_update(|s| {
                let closed = s.handle_resize(width, breakpoint);
                if closed {
                    tracing::debug!(width, breakpoint = breakpoint.px(), "mobile menu collapsed on resize");
                }
                closed
            });
        }),
    );
    on_cleanup(move || {
        pointer.release();
        resize.release();
    });

    let toggle_dropdown = move |_| {
        state.update(|s| s.toggle_dropdown());
        tracing::debug!(open = dropdown_open.get_untracked(), "dropdown toggled");
    };
    let toggle_mobile_menu = move |_| {
        state.update(|s| s.toggle_mobile_menu());
        tracing::debug!(open = mobile_menu_open.get_untracked(), "mobile menu toggled");
    };

    view! {
        <nav class="bg-white shadow-lg fixed w-full z-30 top-0 left-0 font-poppins">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="text-2xl md:text-3xl font-extrabold text-gray-800">
                    <A href="/" attr:class="flex items-center space-x-1">
                        <span class="text-pink-600">{brand.accent}</span>
                        <span class="text-gray-800">{brand.name}</span>
                    </A>
                </div>

                <ul class="hidden md:flex space-x-8 items-center">
                    {DESKTOP_LINKS.into_iter().map(|link| view! { <NavItem link=link /> }).collect_view()}
                    <li class="relative" node_ref=dropdown_ref>
                        <button
                            class="text-gray-700 hover:text-pink-600 font-medium transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-pink-300 rounded-md px-3 py-1"
                            aria-expanded=move || dropdown_open.get().to_string()
                            aria-haspopup="true"
                            on:click=toggle_dropdown
                        >
                            "Login/Sign Up"
                        </button>
                        <Show when=move || dropdown_open.get()>
                            <div class="absolute bg-white shadow-xl rounded-lg w-40 mt-3 right-0 z-20 border border-gray-100">
                                {ROLE_LINKS.into_iter().map(|link| view! { <AuthLink link=link state=state /> }).collect_view()}
                            </div>
                        </Show>
                    </li>
                </ul>

                <div class="md:hidden">
                    <button
                        class="focus:outline-none focus:ring-2 focus:ring-pink-300 rounded-md p-2"
                        aria-label=move || hamburger_label(mobile_menu_open.get())
                        aria-expanded=move || mobile_menu_open.get().to_string()
                        on:click=toggle_mobile_menu
                    >
                        <svg
                            class=move || if mobile_menu_open.get() {
                                "w-7 h-7 text-gray-800 transition-transform duration-300 rotate-90"
                            } else {
                                "w-7 h-7 text-gray-800 transition-transform duration-300"
                            }
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            viewBox="0 0 24 24"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                d=move || hamburger_glyph(mobile_menu_open.get())
                            />
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || mobile_menu_open.get()>
                <div class="md:hidden bg-white shadow-lg overflow-hidden border-t border-gray-100">
                    {MOBILE_LINKS.into_iter().map(|link| view! { <MobileLink link=link state=state /> }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Desktop row item, highlighted while its route is current.
#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let location = use_location();
    let is_active = move || link.route.is_active(&location.pathname.get());

    view! {
        <li class="transition-transform duration-200 hover:scale-105 active:scale-95">
            <A href=link.href() attr:class=move || desktop_link_class(is_active())>
                {link.label}
            </A>
        </li>
    }
}

/// Role link inside the dropdown panel.
#[component]
fn AuthLink(link: NavLink, state: RwSignal<NavState>) -> impl IntoView {
    let on_select = move |_| select(state, &link);

    view! {
        <div class="transition-transform duration-200 hover:translate-x-1" on:click=on_select>
            <A
                href=link.href()
                attr:class="block px-4 py-3 text-sm font-medium text-gray-800 hover:bg-pink-50 hover:text-pink-600 transition-colors duration-300"
            >
                {link.label}
            </A>
        </div>
    }
}

/// Stacked link inside the mobile menu.
#[component]
fn MobileLink(link: NavLink, state: RwSignal<NavState>) -> impl IntoView {
    let on_select = move |_| select(state, &link);

    view! {
        <div on:click=on_select>
            <A
                href=link.href()
                attr:class="block px-6 py-4 text-base font-medium text-gray-800 hover:bg-pink-50 hover:text-pink-600 transition-colors duration-300"
            >
                {link.label}
            </A>
        </div>
    }
}

// Navigation itself is left to the router; this only closes the container.
fn select(state: RwSignal<NavState>, link: &NavLink) {
    state.update(|s| {
        let href = s.select_link(link);
        tracing::debug!(href, label = link.label, "nav link selected");
    });
}
