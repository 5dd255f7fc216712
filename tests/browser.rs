// Browser-level checks for the bits the string renderer cannot see: the
// mounted shell and the mobile drawer's open/close contract.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use nain_landing::app::App;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_app() {
    document().body().unwrap().set_inner_html("");
    leptos::mount::mount_to_body(App);
}

fn query(selector: &str) -> Option<web_sys::Element> {
    document().query_selector(selector).unwrap()
}

fn click(selector: &str) {
    let element: web_sys::HtmlElement = query(selector).unwrap().dyn_into().unwrap();
    element.click();
}

#[wasm_bindgen_test]
fn shell_renders_nav_and_footer_around_the_page() {
    mount_app();
    assert!(query("header.nav").is_some());
    assert!(query("main").is_some());
    assert!(query("footer.footer").is_some());
}

#[wasm_bindgen_test]
fn menu_double_toggle_returns_to_closed() {
    mount_app();
    assert!(query(".nav-drawer").is_none());
    click(".nav-toggle");
    assert!(query(".nav-drawer").is_some());
    click(".nav-toggle");
    assert!(query(".nav-drawer").is_none());
}

#[wasm_bindgen_test]
fn clicking_a_drawer_link_closes_the_menu() {
    mount_app();
    click(".nav-toggle");
    assert!(query(".nav-drawer").is_some());
    click(".nav-drawer a");
    assert!(query(".nav-drawer").is_none());
}
