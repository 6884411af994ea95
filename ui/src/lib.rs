use leptos::leptos_dom::logging::console_warn;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // before first paint, so the page never flashes the wrong theme
    if let Err(e) = theme::apply_theme(theme::resolved_theme()) {
        console_warn(&format!("theme: {e:#}"));
    }

    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod links;
pub mod menu;
pub mod pages;
pub mod routes;
pub mod theme;

pub use crate::app::App;
