//! BIDUA Pods storefront.
//!
//! Client-side Leptos app over the Pods libraries:
//! - catalogue, product detail and gallery pages with the image lightbox
//! - order form with a live quote and WhatsApp / email hand-off
//! - contact form

mod app;
mod browser;
mod components;
mod pages;

pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
