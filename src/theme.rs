//! Theme values shared by the controller and its configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The string written to the root attribute and to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse an exact attribute/storage value. Unknown strings yield `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Next theme given the raw value currently on the root element.
    ///
    /// Only an exact `"light"` goes to dark. Everything else, including an
    /// unset attribute or an unrecognised string, goes to light.
    pub fn next_after(current: Option<&str>) -> Self {
        match current {
            Some("light") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
