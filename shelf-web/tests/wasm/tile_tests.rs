#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use js_sys::Promise;
use shelf_engine::{Product, TileConfig, Variant};
use shelf_web::components::product_tile::{ProductTile, ProductTileProps};
use shelf_web::{dom, styles};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::{Callback, Renderer};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("tile-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id("tile-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

/// Let the scheduler flush renders and effects.
async fn settle() {
    let promise = Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .expect("set timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn render_tile() {
    let product = Product {
        variants: vec![Variant::new("a", "Alpha"), Variant::new("b", "Beta")],
        ..Product::new("t", "Tile")
    };
    let props = ProductTileProps {
        product: Rc::new(product),
        config: Rc::new(TileConfig::default()),
        on_add_to_cart: Callback::noop(),
    };
    Renderer::<ProductTile>::with_root_and_props(fresh_root(), props).render();
}

fn query(selector: &str) -> Option<web_sys::Element> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
}

fn click(selector: &str) {
    query(selector)
        .expect("element exists")
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn mousedown_on(target: &web_sys::EventTarget) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("mousedown", &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
async fn outside_pointer_down_closes_dropdown() {
    render_tile();
    settle().await;
    click("#tile-root .dropdown-toggle");
    settle().await;
    assert!(query("#tile-root .dropdown-menu.show").is_some());

    let menu = query("#tile-root .dropdown-menu").expect("menu");
    mousedown_on(&menu);
    settle().await;
    assert!(
        query("#tile-root .dropdown-menu.show").is_some(),
        "pointer-down inside the dropdown keeps it open"
    );

    mousedown_on(&dom::document().expect("document").body().expect("body"));
    settle().await;
    assert!(query("#tile-root .dropdown-menu.show").is_none());
}

#[wasm_bindgen_test]
async fn selecting_updates_caption_and_closes() {
    render_tile();
    settle().await;
    click("#tile-root .dropdown-toggle");
    settle().await;
    click("#tile-root [data-variant-id='b']");
    settle().await;
    let caption = query("#tile-root .dropdown-toggle span")
        .expect("caption")
        .text_content()
        .unwrap_or_default();
    assert_eq!(caption, "Beta");
    assert!(query("#tile-root .dropdown-menu.show").is_none());
}

#[wasm_bindgen_test]
async fn quick_look_opens_and_closes_from_button() {
    render_tile();
    settle().await;
    click("#tile-root .shelf-quick-look-btn");
    settle().await;
    assert!(query("[role='dialog']").is_some());
    click("[role='dialog'] button[aria-label='Close']");
    settle().await;
    assert!(query("[role='dialog']").is_none());
}

#[wasm_bindgen_test]
async fn quick_look_takes_focus_and_closes_on_escape() {
    render_tile();
    settle().await;
    let button = query("#tile-root .shelf-quick-look-btn")
        .expect("quick look button")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    button.focus().expect("focus button");
    button.click();
    settle().await;
    let dialog = query("[role='dialog']").expect("dialog open");
    let active = dom::document()
        .expect("document")
        .active_element()
        .expect("something focused");
    assert!(active.is_same_node(Some(&*dialog)), "dialog should hold focus");

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    active.dispatch_event(&escape).expect("dispatch");
    settle().await;
    assert!(query("[role='dialog']").is_none());

    let restored = dom::document()
        .expect("document")
        .active_element()
        .expect("focus restored");
    assert!(restored.class_name().contains("shelf-quick-look-btn"));
}

#[wasm_bindgen_test]
fn stylesheet_installs_once() {
    styles::ensure_installed();
    assert!(!styles::ensure_installed());
    let doc = dom::document().expect("document");
    let count = doc
        .query_selector_all(&format!("#{}", styles::STYLE_ELEMENT_ID))
        .expect("query")
        .length();
    assert_eq!(count, 1);
}
