//! Browser tests for the navbar. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos::task::tick;
use leptos_router::components::Router;
use refood_web::nav::Navbar;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let doc = document();
    let div = doc.create_element("div").expect("create container");
    doc.body().expect("body").append_child(&div).expect("append container");
    div.unchecked_into()
}

fn find(root: &web_sys::HtmlElement, selector: &str) -> Option<web_sys::HtmlElement> {
    root.query_selector(selector)
        .expect("valid selector")
        .map(|el| el.unchecked_into())
}

fn mousedown_on(target: &web_sys::EventTarget) {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("mousedown", &init)
        .expect("mousedown event");
    target.dispatch_event(&event).expect("dispatch mousedown");
}

fn text(root: &web_sys::HtmlElement) -> String {
    root.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn outside_pointer_down_closes_dropdown() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Router><Navbar /></Router> });

    let trigger = find(&root, "button[aria-haspopup]").expect("login trigger");
    trigger.click();
    tick().await;
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(text(&root).contains("NGO"));

    let region = find(&root, "li.relative").expect("dropdown region");
    mousedown_on(&region);
    tick().await;
    assert!(text(&root).contains("NGO"), "inside pointer-down closed the dropdown");

    mousedown_on(&document().body().expect("body"));
    tick().await;
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!text(&root).contains("NGO"));
}

#[wasm_bindgen_test]
async fn hamburger_swaps_label_and_mobile_link_closes_menu() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Router><Navbar /></Router> });

    let hamburger = find(&root, "button[aria-label]").expect("hamburger");
    assert_eq!(hamburger.get_attribute("aria-label").as_deref(), Some("Open Menu"));

    hamburger.click();
    tick().await;
    assert_eq!(hamburger.get_attribute("aria-label").as_deref(), Some("Close Menu"));
    assert!(text(&root).contains("User Login"));

    let home = find(&root, "div.md\\:hidden.border-t a").expect("first mobile link");
    home.click();
    tick().await;
    assert_eq!(hamburger.get_attribute("aria-label").as_deref(), Some("Open Menu"));
    assert!(!text(&root).contains("User Login"));
}

fn pathname() -> String {
    window().location().pathname().expect("pathname")
}

fn resize_window() {
    let event = web_sys::Event::new("resize").expect("resize event");
    window().dispatch_event(&event).expect("dispatch resize");
}

#[wasm_bindgen_test]
async fn mobile_home_link_navigates_back_to_root() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Router><Navbar /></Router> });

    find(&root, "ul a[href='/services']").expect("desktop services link").click();
    tick().await;
    assert_eq!(pathname(), "/services");

    let hamburger = find(&root, "button[aria-label]").expect("hamburger");
    hamburger.click();
    tick().await;
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));

    find(&root, "div.md\\:hidden.border-t a[href='/']").expect("mobile home link").click();
    tick().await;
    assert_eq!(pathname(), "/");
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!text(&root).contains("User Login"));
}

#[wasm_bindgen_test]
async fn remount_handles_outside_pointer_down_once() {
    let first = container();
    let handle = leptos::mount::mount_to(first.clone(), || view! { <Router><Navbar /></Router> });
    drop(handle);
    tick().await;
    assert!(find(&first, "nav").is_none(), "navbar survived unmount");

    // A listener leaked from the first mount would hit a disposed owner here.
    mousedown_on(&document().body().expect("body"));
    tick().await;

    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Router><Navbar /></Router> });
    let trigger = find(&root, "button[aria-haspopup]").expect("login trigger");
    trigger.click();
    tick().await;
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));

    mousedown_on(&document().body().expect("body"));
    tick().await;
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!text(&root).contains("NGO"));

    // A second pointer-down on a closed dropdown leaves it closed.
    mousedown_on(&document().body().expect("body"));
    tick().await;
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
async fn resize_after_unmount_is_ignored() {
    let first = container();
    let handle = leptos::mount::mount_to(first.clone(), || view! { <Router><Navbar /></Router> });
    find(&first, "button[aria-label]").expect("hamburger").click();
    tick().await;
    drop(handle);
    tick().await;

    resize_window();
    tick().await;
    assert!(find(&first, "nav").is_none());

    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Router><Navbar /></Router> });
    let hamburger = find(&root, "button[aria-label]").expect("hamburger");
    hamburger.click();
    tick().await;
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));

    // The headless runner is wider than the breakpoint, so a live listener closes the menu.
    if window().inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default() >= 768.0 {
        resize_window();
        tick().await;
        assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
    }
}
