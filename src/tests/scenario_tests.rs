//! End-to-end page load and click sequences.

use super::{CONTROL, KEY, attribute, init_logging, page_with_button, stored};
use std::rc::Rc;

use crate::controller::ThemeController;
use crate::storage::{MemoryStore, PreferenceStore};
use crate::surface::FakeDocument;

#[test]
fn test_first_visit_then_two_clicks() {
    let controller = page_with_button(MemoryStore::new());

    controller.initialize().unwrap();
    assert_eq!(attribute(&controller).as_deref(), Some("dark"));
    assert_eq!(stored(&controller), None);

    assert_eq!(controller.surface().click(CONTROL), 1);
    assert_eq!(attribute(&controller).as_deref(), Some("light"));
    assert_eq!(stored(&controller).as_deref(), Some("light"));

    controller.surface().click(CONTROL);
    assert_eq!(attribute(&controller).as_deref(), Some("dark"));
    assert_eq!(stored(&controller).as_deref(), Some("dark"));
}

#[test]
fn test_returning_visitor_with_light_preference() {
    let controller = page_with_button(MemoryStore::with_item(KEY, "light"));
    controller.initialize().unwrap();
    assert_eq!(attribute(&controller).as_deref(), Some("light"));
}

#[test]
fn test_handler_works_through_cloned_handle() {
    init_logging();
    let controller = ThemeController::new(
        MemoryStore::new(),
        FakeDocument::new().with_control(CONTROL),
    );
    controller.initialize().unwrap();

    let handle = controller.clone();
    drop(controller);
    assert_eq!(handle.surface().click(CONTROL), 1);
    assert_eq!(attribute(&handle).as_deref(), Some("light"));
}

#[test]
fn test_button_keeps_working_after_controller_dropped() {
    init_logging();
    // The page outlives the controller, as the live DOM does in the browser.
    let page = Rc::new(FakeDocument::new().with_control(CONTROL));
    let store = Rc::new(MemoryStore::new());

    let controller = ThemeController::new(Rc::clone(&store), Rc::clone(&page));
    controller.initialize().unwrap();
    drop(controller);

    assert_eq!(page.click(CONTROL), 1);
    assert_eq!(page.attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some("light"));

    page.click(CONTROL);
    assert_eq!(page.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some("dark"));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_preference_survives_reload() {
    use crate::storage::FileStore;

    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    // First page load: click once to pick light.
    let first = ThemeController::new(
        FileStore::new(&path),
        FakeDocument::new().with_control(CONTROL),
    );
    first.initialize().unwrap();
    first.surface().click(CONTROL);
    drop(first);

    // Reload: a fresh document picks the stored preference back up.
    let reloaded = ThemeController::new(
        FileStore::new(&path),
        FakeDocument::new().with_control(CONTROL),
    );
    let report = reloaded.initialize().unwrap();
    assert_eq!(report.value, "light");
    assert_eq!(reloaded.surface().attribute("data-theme").as_deref(), Some("light"));
}
