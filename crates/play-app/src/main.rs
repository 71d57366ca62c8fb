//! WASM entry point for the PlayCharts editor

use leptos::prelude::*;
use play_components::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("mounting PlayCharts");
    leptos::mount::mount_to_body(|| view! { <App /> });
}
