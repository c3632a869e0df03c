//! # contact-page
//!
//! Leptos + WASM frontend for a static contact page: theme toggle,
//! back-to-top affordance, message counter, remembered contact fields,
//! conditional phone requirement and a contact-form submission flow with a
//! honeypot and optional live endpoint.
//!
//! Behavior lives in [`controller`], which talks to the page only through the
//! capability traits in [`view`], [`events`], [`util`] and [`net`]. The
//! `csr` feature adds the browser implementations in `web` and the
//! [`start`] entry point.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod view;
#[cfg(feature = "csr")]
pub mod web;

#[cfg(test)]
mod test_support;

/// WASM entry point: mount the page, then attach the controller to it.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
    web::mount();
}
