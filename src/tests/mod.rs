//! Behavioural tests for the theme controller.
//!
//! These drive the controller through the in-memory store and the fake
//! document the same way page load and button clicks drive it in a browser.

mod scenario_tests;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::storage::MemoryStore;
use crate::surface::FakeDocument;

pub(crate) const KEY: &str = "theme";
pub(crate) const ATTR: &str = "data-theme";
pub(crate) const CONTROL: &str = "themeToggle";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Controller over an empty store and a page that has the toggle button.
pub(crate) fn page_with_button(store: MemoryStore) -> ThemeController<MemoryStore, FakeDocument> {
    init_logging();
    ThemeController::with_config(
        ThemeConfig::default(),
        store,
        FakeDocument::new().with_control(CONTROL),
    )
}

pub(crate) fn stored(controller: &ThemeController<MemoryStore, FakeDocument>) -> Option<String> {
    use crate::storage::PreferenceStore;
    controller.store().get_item(KEY).unwrap()
}

pub(crate) fn attribute(controller: &ThemeController<MemoryStore, FakeDocument>) -> Option<String> {
    controller.surface().attribute(ATTR)
}
