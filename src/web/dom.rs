//! DOM-backed page surface.
//!
//! Every accessor looks its element up by id on each call, so markup that
//! lacks an optional control simply turns the related feature off.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

use crate::events::{EventSource, Handler, PageEvent, Subscription};
use crate::state::submission::StatusMessage;
use crate::state::theme::THEME_ATTRIBUTE;
use crate::view::{Field, FormView, PREFERRED_GROUP, PageChrome, ids};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const THEME_COLOR_META: &str = "meta[name=\"theme-color\"]";

/// Window + document pair the controller drives.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// `None` outside a browser document.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Endpoint declared on the form via `data-endpoint`.
    pub fn form_endpoint(&self) -> Option<String> {
        self.element(ids::FORM)?.get_attribute("data-endpoint")
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn form(&self) -> Option<HtmlFormElement> {
        self.element(ids::FORM)?.dyn_into().ok()
    }

    fn preferred_selector(checked: bool) -> String {
        let suffix = if checked { ":checked" } else { "" };
        format!("input[name=\"{PREFERRED_GROUP}\"]{suffix}")
    }

    fn targets(&self, event: PageEvent) -> (Vec<EventTarget>, &'static str) {
        match event {
            PageEvent::ThemeToggle => (self.target(ids::THEME_TOGGLE), "click"),
            PageEvent::Scroll => (vec![self.window.clone().into()], "scroll"),
            PageEvent::BackToTop => (self.target(ids::BACK_TO_TOP), "click"),
            PageEvent::MessageInput => (self.target(Field::Message.id()), "input"),
            PageEvent::NameChange => (self.target(Field::Name.id()), "change"),
            PageEvent::EmailChange => (self.target(Field::Email.id()), "change"),
            PageEvent::PreferredChange => (self.preferred_radios(), "change"),
            PageEvent::InquiryChange => (self.target(Field::Inquiry.id()), "change"),
            PageEvent::FormInput => (self.target(ids::FORM), "input"),
            PageEvent::Submit => (self.target(ids::FORM), "submit"),
        }
    }

    fn target(&self, id: &str) -> Vec<EventTarget> {
        self.element(id).map(EventTarget::from).into_iter().collect()
    }

    fn preferred_radios(&self) -> Vec<EventTarget> {
        let Ok(list) = self.document.query_selector_all(&Self::preferred_selector(false)) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(EventTarget::from)
            .collect()
    }
}

fn read_value(element: &Element) -> Option<String> {
    js_sys::Reflect::get(element, &JsValue::from_str("value"))
        .ok()?
        .as_string()
}

// =============================================================================
// FORM
// =============================================================================

impl FormView for DomPage {
    fn value(&self, field: Field) -> Option<String> {
        read_value(&self.element(field.id())?)
    }

    fn set_value(&self, field: Field, value: &str) {
        if let Some(el) = self.element(field.id()) {
            let _ = js_sys::Reflect::set(&el, &JsValue::from_str("value"), &JsValue::from_str(value));
        }
    }

    fn max_length_attribute(&self, field: Field) -> Option<String> {
        self.element(field.id())?.get_attribute("maxlength")
    }

    fn set_required(&self, field: Field, required: bool) {
        let Some(el) = self.element(field.id()) else {
            return;
        };
        let _ = el.toggle_attribute_with_force("required", required);
        if required {
            let _ = el.set_attribute("aria-required", "true");
        } else {
            let _ = el.remove_attribute("aria-required");
        }
    }

    fn set_placeholder(&self, field: Field, text: &str) {
        if let Some(el) = self.element(field.id()) {
            let _ = el.set_attribute("placeholder", text);
        }
    }

    fn checked_preferred(&self) -> Option<String> {
        let checked = self
            .document
            .query_selector(&Self::preferred_selector(true))
            .ok()??;
        Some(checked.dyn_into::<HtmlInputElement>().ok()?.value())
    }

    fn set_counter_text(&self, text: &str) {
        if let Some(el) = self.element(ids::COUNTER) {
            el.set_text_content(Some(text));
        }
    }

    fn set_status(&self, status: Option<&StatusMessage>) {
        let Some(container) = self.element(ids::STATUS) else {
            return;
        };
        container.set_inner_html("");
        let Some(status) = status else {
            return;
        };
        let Ok(alert) = self.document.create_element("div") else {
            return;
        };
        alert.set_class_name(&format!("alert {}", status.kind.css_class()));
        alert.set_text_content(Some(&status.text));
        let _ = container.append_child(&alert);
    }

    fn set_loading(&self, loading: bool) {
        if let Some(button) = self.element(ids::SUBMIT) {
            let _ = button.class_list().toggle_with_force("loading", loading);
            let _ = button.toggle_attribute_with_force("disabled", loading);
        }
        if let Some(form) = self.element(ids::FORM) {
            let _ = form.set_attribute("aria-busy", if loading { "true" } else { "false" });
        }
    }

    fn reset(&self) {
        if let Some(form) = self.form() {
            form.reset();
        }
    }

    fn check_validity(&self) -> bool {
        self.form().map_or(true, |form| form.check_validity())
    }

    fn focus_first_invalid(&self) {
        let Some(form) = self.form() else {
            return;
        };
        let Ok(Some(invalid)) = form.query_selector(":invalid") else {
            return;
        };
        if let Ok(el) = invalid.dyn_into::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn report_validity(&self) {
        if let Some(form) = self.form() {
            form.report_validity();
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        let Some(form) = self.form() else {
            return Vec::new();
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        iter.filter_map(|item| {
            let pair: js_sys::Array = item.ok()?.dyn_into().ok()?;
            // File inputs yield non-string values; they are skipped.
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
    }
}

// =============================================================================
// CHROME
// =============================================================================

impl PageChrome for DomPage {
    fn theme_attribute(&self) -> Option<String> {
        self.document.document_element()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme_attribute(&self, mode: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, mode);
        }
    }

    fn set_toggle_icon(&self, class: &str) {
        let icon = self
            .element(ids::THEME_TOGGLE)
            .and_then(|toggle| toggle.query_selector("i").ok().flatten());
        if let Some(icon) = icon {
            icon.set_class_name(class);
        }
    }

    fn set_theme_color(&self, color: &str) {
        if let Ok(Some(meta)) = self.document.query_selector(THEME_COLOR_META) {
            let _ = meta.set_attribute("content", color);
        }
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        if let Some(el) = self.element(ids::BACK_TO_TOP) {
            let _ = el.class_list().toggle_with_force("visible", visible);
        }
    }

    fn scroll_to_top(&self) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

// =============================================================================
// EVENTS
// =============================================================================

impl EventSource for DomPage {
    fn listen(&self, event: PageEvent, handler: Handler) -> Subscription {
        let (targets, name) = self.targets(event);
        if targets.is_empty() {
            return Subscription::inert();
        }
        let prevent_default = event == PageEvent::Submit;
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            if prevent_default {
                ev.prevent_default();
            }
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);
        for target in &targets {
            let _ = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        Subscription::new(move || {
            for target in &targets {
                let _ = target.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
            }
        })
    }
}
