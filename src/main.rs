// NAIN Landing Page — Leptos 0.8 Edition

use leptos::prelude::*;
use nain_landing::app::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("mounting nain-landing");
    leptos::mount::mount_to_body(|| view! { <App/> });
}
