//! Document abstraction the controller reflects the theme onto.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SurfaceError;

/// Callback run when the toggle control is activated.
pub type ActivationHandler = Box<dyn Fn()>;

/// The parts of a document the theme controller touches: attributes on the
/// root element and the activation event of a control looked up by id.
pub trait ThemeSurface {
    /// Current value of attribute `name` on the root element.
    fn root_attribute(&self, name: &str) -> Result<Option<String>, SurfaceError>;

    /// Set attribute `name` on the root element.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError>;

    /// Attach `handler` to the activation event of the control with id
    /// `control_id`.
    ///
    /// Returns `Ok(false)` when no such control exists. Handlers accumulate:
    /// binding twice means two handlers run per activation.
    fn bind_activation(
        &self,
        control_id: &str,
        handler: ActivationHandler,
    ) -> Result<bool, SurfaceError>;
}

/// Shared surface, for hosts that keep the document alive independently of
/// the controller, as the live DOM is.
impl<T: ThemeSurface + ?Sized> ThemeSurface for Rc<T> {
    fn root_attribute(&self, name: &str) -> Result<Option<String>, SurfaceError> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
        (**self).set_root_attribute(name, value)
    }

    fn bind_activation(
        &self,
        control_id: &str,
        handler: ActivationHandler,
    ) -> Result<bool, SurfaceError> {
        (**self).bind_activation(control_id, handler)
    }
}

/// In-memory document for native hosts and tests.
#[derive(Default)]
pub struct FakeDocument {
    attributes: RefCell<HashMap<String, String>>,
    controls: RefCell<HashMap<String, Vec<Rc<dyn Fn()>>>>,
}

impl FakeDocument {
    /// A document with a root element and no controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control with the given id.
    pub fn with_control(self, id: impl Into<String>) -> Self {
        self.controls.borrow_mut().entry(id.into()).or_default();
        self
    }

    /// Pre-set a root attribute, as page markup would.
    pub fn with_root_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        self
    }

    /// Root attribute value, without the `Result` wrapper.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Number of handlers attached to a control. Zero for unknown ids.
    pub fn handler_count(&self, control_id: &str) -> usize {
        self.controls
            .borrow()
            .get(control_id)
            .map_or(0, |handlers| handlers.len())
    }

    /// Activate a control, running every attached handler in attachment
    /// order. Returns how many handlers ran.
    pub fn click(&self, control_id: &str) -> usize {
        // Handlers write back into this document, so release the borrow first.
        let handlers: Vec<Rc<dyn Fn()>> = self
            .controls
            .borrow()
            .get(control_id)
            .cloned()
            .unwrap_or_default();

        for handler in &handlers {
            handler();
        }
        handlers.len()
    }
}

impl ThemeSurface for FakeDocument {
    fn root_attribute(&self, name: &str) -> Result<Option<String>, SurfaceError> {
        Ok(self.attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn bind_activation(
        &self,
        control_id: &str,
        handler: ActivationHandler,
    ) -> Result<bool, SurfaceError> {
        match self.controls.borrow_mut().get_mut(control_id) {
            Some(handlers) => {
                handlers.push(Rc::from(handler));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for FakeDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let controls: HashMap<String, usize> = self
            .controls
            .borrow()
            .iter()
            .map(|(id, handlers)| (id.clone(), handlers.len()))
            .collect();
        f.debug_struct("FakeDocument")
            .field("attributes", &self.attributes.borrow())
            .field("controls", &controls)
            .finish()
    }
}
