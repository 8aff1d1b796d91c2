//! Combobox configuration file handling
//!
//! Hosts that describe their widgets declaratively can keep the per-instance
//! settings in TOML:
//!
//! ```toml
//! autocomplete = "both"
//! input_debounce_ms = 150
//! typeahead_reset_ms = 800
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AriaError, Result};
use crate::state::{Autocomplete, ComboboxState};

/// Settings of one combobox instance
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComboboxConfig {
    /// ARIA autocomplete mode, immutable for the lifetime of the instance
    #[serde(default)]
    pub autocomplete: Autocomplete,
    /// Delay used by hosts to debounce input handling
    #[serde(default = "default_input_debounce_ms")]
    pub input_debounce_ms: u64,
    /// Inactivity window after which the typeahead buffer resets
    #[serde(default = "default_typeahead_reset_ms")]
    pub typeahead_reset_ms: u64,
}

fn default_input_debounce_ms() -> u64 {
    200
}

fn default_typeahead_reset_ms() -> u64 {
    1000
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            autocomplete: Autocomplete::default(),
            input_debounce_ms: default_input_debounce_ms(),
            typeahead_reset_ms: default_typeahead_reset_ms(),
        }
    }
}

impl ComboboxConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AriaError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), autocomplete = %config.autocomplete, "loaded combobox config");
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| AriaError::Other(err.to_string()))
    }

    /// Closed, unfocused state with nothing active
    pub fn initial_state(&self) -> ComboboxState {
        ComboboxState::new(self.autocomplete)
    }

    pub fn input_debounce(&self) -> Duration {
        Duration::from_millis(self.input_debounce_ms)
    }

    pub fn typeahead_reset(&self) -> Duration {
        Duration::from_millis(self.typeahead_reset_ms)
    }
}
