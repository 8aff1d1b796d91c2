//! Combobox state and partial state patches
//!
//! `ComboboxState` is owned by the host. Handlers take it by reference and
//! hand back the settled value, which the host must store before the next
//! event is dispatched. Every change travels as a [`StatePatch`] through the
//! host's `update_state` hook.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::batch::Patch;
use crate::error::AriaError;

/// ARIA autocomplete behavior of a combobox
///
/// See <https://developer.mozilla.org/en-US/docs/Web/Accessibility/ARIA/Attributes/aria-autocomplete>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autocomplete {
    /// The listbox shows a static set of options
    #[default]
    None,
    /// The listbox is filtered by the typed text
    List,
    /// Filtered listbox plus inline completion of the typed text
    Both,
    /// Inline completion only
    Inline,
}

impl Autocomplete {
    /// The `aria-autocomplete` token for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Autocomplete::None => "none",
            Autocomplete::List => "list",
            Autocomplete::Both => "both",
            Autocomplete::Inline => "inline",
        }
    }
}

impl fmt::Display for Autocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Autocomplete {
    type Err = AriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Autocomplete::None),
            "list" => Ok(Autocomplete::List),
            "both" => Ok(Autocomplete::Both),
            "inline" => Ok(Autocomplete::Inline),
            other => Err(AriaError::ConfigParse(format!(
                "unknown autocomplete mode `{other}`"
            ))),
        }
    }
}

/// Which part of the widget holds visual focus
///
/// Visual focus is independent from DOM focus: while the listbox is being
/// navigated the DOM focus usually stays on the combobox input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTarget {
    Combobox,
    Listbox,
}

/// State of one combobox instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboboxState {
    /// Configured autocomplete behavior, fixed for the lifetime of the instance
    pub autocomplete: Autocomplete,
    /// Whether the listbox popup is shown
    pub is_listbox_open: bool,
    /// Element with visual focus, `None` when neither part has it
    pub element_with_focus: Option<FocusTarget>,
    /// Currently highlighted option
    pub active_option: Option<String>,
}

impl ComboboxState {
    /// Initial state: listbox closed, no visual focus, no active option
    pub fn new(autocomplete: Autocomplete) -> Self {
        Self {
            autocomplete,
            ..Default::default()
        }
    }

    /// Whether the given part currently holds visual focus
    pub fn has_focus(&self, target: FocusTarget) -> bool {
        self.element_with_focus == Some(target)
    }
}

/// Partial update of a [`ComboboxState`]
///
/// `None` leaves a field untouched. Nested options distinguish "set to null"
/// (`Some(None)`) from "not part of the patch" (`None`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub is_listbox_open: Option<bool>,
    pub element_with_focus: Option<Option<FocusTarget>>,
    pub active_option: Option<Option<String>>,
}

impl StatePatch {
    /// Patch that only sets `is_listbox_open`
    pub fn listbox_open(open: bool) -> Self {
        Self {
            is_listbox_open: Some(open),
            ..Default::default()
        }
    }

    /// Patch that only sets the element with visual focus
    pub fn focus(target: Option<FocusTarget>) -> Self {
        Self {
            element_with_focus: Some(target),
            ..Default::default()
        }
    }

    /// Patch that only sets the active option
    pub fn active_option(option: Option<String>) -> Self {
        Self {
            active_option: Some(option),
            ..Default::default()
        }
    }
}

impl Patch for StatePatch {
    type State = ComboboxState;

    fn is_empty(&self) -> bool {
        self.is_listbox_open.is_none()
            && self.element_with_focus.is_none()
            && self.active_option.is_none()
    }

    fn merge(&mut self, later: Self) {
        if later.is_listbox_open.is_some() {
            self.is_listbox_open = later.is_listbox_open;
        }
        if later.element_with_focus.is_some() {
            self.element_with_focus = later.element_with_focus;
        }
        if later.active_option.is_some() {
            self.active_option = later.active_option;
        }
    }

    fn apply(&self, state: &ComboboxState) -> ComboboxState {
        let mut next = state.clone();
        if let Some(open) = self.is_listbox_open {
            next.is_listbox_open = open;
        }
        if let Some(focus) = self.element_with_focus {
            next.element_with_focus = focus;
        }
        if let Some(option) = &self.active_option {
            next.active_option = option.clone();
        }
        next
    }
}
