use super::*;

use crate::test_support::FakePage;
use crate::util::storage::MemoryStorage;

fn manager(page: &Rc<FakePage>, storage: &Rc<MemoryStorage>) -> ThemeManager {
    ThemeManager::new(page.clone(), storage.clone())
}

#[test]
fn init_uses_persisted_value_over_system_preference() {
    let page = Rc::new(FakePage::contact_form());
    page.prefers_dark.set(true);
    let storage = Rc::new(MemoryStorage::with_entries([("theme", "light")]));
    assert_eq!(manager(&page, &storage).init(), ThemePreference::Light);
    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
}

#[test]
fn init_falls_back_to_system_then_light() {
    let page = Rc::new(FakePage::contact_form());
    page.prefers_dark.set(true);
    let storage = Rc::new(MemoryStorage::new());
    assert_eq!(manager(&page, &storage).init(), ThemePreference::Dark);

    let page = Rc::new(FakePage::contact_form());
    let storage = Rc::new(MemoryStorage::new());
    assert_eq!(manager(&page, &storage).init(), ThemePreference::Light);
}

#[test]
fn apply_updates_attribute_storage_icon_and_meta() {
    let page = Rc::new(FakePage::contact_form());
    let storage = Rc::new(MemoryStorage::new());
    manager(&page, &storage).apply(ThemePreference::Dark);
    assert_eq!(page.theme_attribute().as_deref(), Some("dark"));
    assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
    assert_eq!(*page.icon.borrow(), "fas fa-sun");
    assert_eq!(*page.theme_color.borrow(), "#0b1220");
}

#[test]
fn double_toggle_restores_attribute_and_persisted_value() {
    let page = Rc::new(FakePage::contact_form());
    let storage = Rc::new(MemoryStorage::new());
    let theme = manager(&page, &storage);
    theme.init();
    assert_eq!(theme.toggle(), ThemePreference::Dark);
    assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
    assert_eq!(theme.toggle(), ThemePreference::Light);
    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
    assert_eq!(storage.peek("theme").as_deref(), Some("light"));
    assert_eq!(*page.icon.borrow(), "fas fa-moon");
}

#[test]
fn toggle_reads_the_live_attribute() {
    let page = Rc::new(FakePage::contact_form());
    let storage = Rc::new(MemoryStorage::new());
    page.set_theme_attribute("dark");
    assert_eq!(manager(&page, &storage).toggle(), ThemePreference::Light);
}

#[test]
fn unavailable_storage_still_applies_theme() {
    let page = Rc::new(FakePage::contact_form());
    page.prefers_dark.set(true);
    let storage = Rc::new(MemoryStorage::unavailable());
    let theme = manager(&page, &storage);
    assert_eq!(theme.init(), ThemePreference::Dark);
    assert_eq!(theme.toggle(), ThemePreference::Light);
    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
}
