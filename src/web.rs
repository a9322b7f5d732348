//! Browser backends: `localStorage` and the live DOM.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Storage};

use crate::error::{StorageError, SurfaceError};
use crate::storage::PreferenceStore;
use crate::surface::{ActivationHandler, ThemeSurface};

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("Failed to save to localStorage: {:?}", e)))
    }
}

/// The page's `document`, with `documentElement` as the root element.
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn current() -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SurfaceError::Unavailable("No document available".to_string()))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn root(&self) -> Result<web_sys::Element, SurfaceError> {
        self.document
            .document_element()
            .ok_or_else(|| SurfaceError::Unavailable("Document has no root element".to_string()))
    }
}

impl ThemeSurface for WebDocument {
    fn root_attribute(&self, name: &str) -> Result<Option<String>, SurfaceError> {
        Ok(self.root()?.get_attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.root()?
            .set_attribute(name, value)
            .map_err(|e| SurfaceError::Backend(format!("Failed to set {}: {:?}", name, e)))
    }

    fn bind_activation(
        &self,
        control_id: &str,
        handler: ActivationHandler,
    ) -> Result<bool, SurfaceError> {
        let Some(control) = self.document.get_element_by_id(control_id) else {
            return Ok(false);
        };

        let onclick = Closure::wrap(Box::new(move |_event: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);

        control
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Backend(format!("Failed to attach click handler: {:?}", e)))?;

        // The listener lives as long as the page.
        onclick.forget();
        Ok(true)
    }
}
