//! Browser binding: builds a [`Platform`] from the live document and keeps
//! the installed controller alive for the page's lifetime.

pub mod dom;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::FormConfig;
use crate::controller::{FormController, Platform};
use crate::net::api::HttpTransport;
use crate::util::platform::{BrowserClient, BrowserTimer};

use self::dom::DomPage;
use self::storage::LocalStorage;

thread_local! {
    static CONTROLLER: RefCell<Option<FormController>> = const { RefCell::new(None) };
}

/// Install the controller against the current document.
///
/// Returns `None` outside a browser window. The form's `data-endpoint`
/// attribute, when present, takes precedence over the build-time endpoint.
pub fn install() -> Option<FormController> {
    let page = Rc::new(DomPage::new()?);
    let mut config = FormConfig::from_build_env();
    if let Some(endpoint) = page.form_endpoint() {
        config = config.with_endpoint(Some(&endpoint));
    }
    let platform = Platform {
        view: Rc::clone(&page) as Rc<dyn crate::view::FormView>,
        chrome: Rc::clone(&page) as Rc<dyn crate::view::PageChrome>,
        events: page,
        storage: Rc::new(LocalStorage::open()),
        transport: Rc::new(HttpTransport),
        timer: Rc::new(BrowserTimer),
        client: Rc::new(BrowserClient),
        spawner: Rc::new(|fut: LocalBoxFuture<'static, ()>| leptos::task::spawn_local(fut)),
    };
    Some(FormController::install(platform, config))
}

/// Install once and park the controller so its listeners stay attached.
/// A second call replaces (and thereby detaches) the previous controller.
pub fn mount() {
    let Some(controller) = install() else {
        leptos::logging::warn!("contact form: no document to attach to");
        return;
    };
    CONTROLLER.with(|slot| {
        slot.borrow_mut().replace(controller);
    });
}
