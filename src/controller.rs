//! The theme controller: apply the persisted theme on page load and flip it
//! when the toggle control is activated.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::storage::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::Theme;

/// Where the value applied by [`ThemeController::initialize`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Read from the preference store
    Stored,
    /// Nothing (or an empty string) was stored, or the store could not be read
    Default,
}

/// Outcome of [`ThemeController::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Value written to the root attribute, verbatim from storage if present
    pub value: String,
    /// Whether the value came from storage or the configured default
    pub source: ThemeSource,
    /// Whether a toggle control was found and a handler attached
    pub control_bound: bool,
}

struct Shared<S, D> {
    config: ThemeConfig,
    store: S,
    surface: D,
    init_calls: Cell<u32>,
}

impl<S: PreferenceStore, D: ThemeSurface> Shared<S, D> {
    fn stored_value(&self) -> Option<String> {
        match self.store.get_item(&self.config.storage_key) {
            // An empty string counts as nothing stored.
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(e) => {
                log::warn!(
                    "Failed to read theme preference {:?}, using default: {}",
                    self.config.storage_key,
                    e
                );
                None
            }
        }
    }

    fn toggle(&self) -> Result<Theme, ThemeError> {
        let attribute = &self.config.attribute;
        let current = self.surface.root_attribute(attribute)?;
        let next = Theme::next_after(current.as_deref());

        // Attribute first, then storage; both are synchronous.
        self.surface.set_root_attribute(attribute, next.as_str())?;
        self.store.set_item(&self.config.storage_key, next.as_str())?;

        log::info!(
            "Theme toggled: {} -> {}",
            current.as_deref().unwrap_or("<unset>"),
            next
        );
        Ok(next)
    }
}

/// Applies the persisted theme to a [`ThemeSurface`] and toggles it between
/// light and dark, writing every change through to a [`PreferenceStore`].
///
/// The controller is a cheap handle; clones share the same store and surface.
/// Handlers attached to the surface hold a strong reference, so the
/// controller stays alive for as long as the surface keeps its handlers,
/// even after every handle has been dropped.
pub struct ThemeController<S, D> {
    shared: Rc<Shared<S, D>>,
}

impl<S, D> Clone for ThemeController<S, D> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Create a controller with the default configuration.
    pub fn new(store: S, surface: D) -> Self {
        Self::with_config(ThemeConfig::default(), store, surface)
    }

    pub fn with_config(config: ThemeConfig, store: S, surface: D) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                store,
                surface,
                init_calls: Cell::new(0),
            }),
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.shared.config
    }

    pub fn store(&self) -> &S {
        &self.shared.store
    }

    pub fn surface(&self) -> &D {
        &self.shared.surface
    }

    /// Flip the root attribute between light and dark and persist the result.
    ///
    /// An exact `"light"` becomes dark; any other current value, including
    /// none, becomes light. If the storage write fails the attribute has
    /// already changed and the error is returned.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        self.shared.toggle()
    }
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + 'static,
    D: ThemeSurface + 'static,
{
    /// Apply the persisted theme (or the configured default) to the root
    /// element and attach [`toggle`](Self::toggle) to the control's
    /// activation event if the control exists.
    ///
    /// The stored value is applied as-is, without checking it names a known
    /// theme; only an empty string is treated as nothing stored. Nothing is written to storage. Each call attaches another
    /// handler, so after `n` calls one activation toggles `n` times.
    pub fn initialize(&self) -> Result<InitReport, ThemeError> {
        let shared = &self.shared;
        let calls = shared.init_calls.get() + 1;
        shared.init_calls.set(calls);
        if calls > 1 {
            log::warn!(
                "Theme controller initialized {} times; control {:?} now has duplicate handlers",
                calls,
                shared.config.control_id
            );
        }

        let (value, source) = match shared.stored_value() {
            Some(value) => (value, ThemeSource::Stored),
            None => {
                log::debug!(
                    "No stored theme under {:?}, defaulting to {}",
                    shared.config.storage_key,
                    shared.config.default_theme
                );
                (
                    shared.config.default_theme.as_str().to_string(),
                    ThemeSource::Default,
                )
            }
        };

        shared
            .surface
            .set_root_attribute(&shared.config.attribute, &value)?;
        log::info!("Applied theme {:?} ({:?})", value, source);

        let handler_state = Rc::clone(shared);
        let control_bound = shared.surface.bind_activation(
            &shared.config.control_id,
            Box::new(move || {
                if let Err(e) = handler_state.toggle() {
                    log::error!("Theme toggle failed: {}", e);
                }
            }),
        )?;

        if !control_bound {
            log::debug!(
                "No control with id {:?}; theme toggle not attached",
                shared.config.control_id
            );
        }

        Ok(InitReport {
            value,
            source,
            control_bound,
        })
    }
}
