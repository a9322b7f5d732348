//! theme-toggle - persisted light/dark theme switching for web pages
//!
//! Applies the stored theme to the document's root element on page load and
//! flips it between light and dark when the toggle control is clicked,
//! writing every change through to durable storage.
//!
//! Storage and the document sit behind the [`PreferenceStore`] and
//! [`ThemeSurface`] traits. The browser build uses `localStorage` and the live
//! DOM; native builds and tests use [`MemoryStore`], `FileStore` and
//! [`FakeDocument`].

pub mod config;
pub mod controller;
pub mod error;
pub mod storage;
pub mod surface;
pub mod theme;

pub use config::{ConfigError, LogLevel, ThemeConfig};
pub use controller::{InitReport, ThemeController, ThemeSource};
pub use error::{StorageError, SurfaceError, ThemeError};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use storage::{MemoryStore, PreferenceStore};
pub use surface::{ActivationHandler, FakeDocument, ThemeSurface};
pub use theme::Theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(test)]
mod tests;
