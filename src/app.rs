//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::pages::contact::ContactPage;
use crate::state::theme::ThemePreference;

/// Root application component.
///
/// Renders the contact page and the `theme-color` meta tag the theme manager
/// retints.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Contact"/>
        <Meta name="theme-color" content=ThemePreference::Light.theme_color()/>
        <ContactPage/>
    }
}
