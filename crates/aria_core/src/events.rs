//! Framework-neutral event descriptions
//!
//! Handlers never touch native events. Hosts translate their platform events
//! into these types and apply the returned [`Disposition`] themselves.

use crate::state::ComboboxState;

/// Classification of a text input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Text was inserted (typing, paste, drop)
    Insert,
    /// Text was deleted
    Delete,
    /// Composition, history and formatting input: left to the platform
    Other,
}

impl InputKind {
    /// Classify a DOM `InputEvent.inputType` string
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "insertCompositionText" {
            InputKind::Other
        } else if input_type.starts_with("insert") {
            InputKind::Insert
        } else if input_type.starts_with("delete") {
            InputKind::Delete
        } else {
            InputKind::Other
        }
    }
}

/// Keys the combobox reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowDown,
    ArrowUp,
    Escape,
    Tab,
    /// A printable character
    Character(char),
    /// Any other named key
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value, legacy aliases included
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }
}

/// A key press with its modifier state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Whether ctrl modifier is held
    pub ctrl: bool,
    /// Whether shift modifier is held
    pub shift: bool,
    /// Whether alt modifier is held
    pub alt: bool,
    /// Whether meta modifier is held (Cmd on macOS, Win on Windows)
    pub meta: bool,
}

impl KeyEvent {
    /// Key press without modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// What the host must do with the native event after a handler ran
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Disposition {
    /// Leave the native event alone
    pub const PASS: Disposition = Disposition {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Cancel the native default action only
    pub const PREVENT: Disposition = Disposition {
        prevent_default: true,
        stop_propagation: false,
    };

    /// Cancel the default action and stop propagation
    pub const SUPPRESS: Disposition = Disposition {
        prevent_default: true,
        stop_propagation: true,
    };

    pub(crate) fn prevent_if(prevent: bool) -> Self {
        if prevent {
            Self::PREVENT
        } else {
            Self::PASS
        }
    }
}

/// Settled state plus the native event disposition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handled {
    pub state: ComboboxState,
    pub disposition: Disposition,
}

impl Handled {
    pub(crate) fn new(state: ComboboxState, disposition: Disposition) -> Self {
        Self { state, disposition }
    }

    /// Event was not relevant: state unchanged, native event untouched
    pub(crate) fn ignored(state: &ComboboxState) -> Self {
        Self::new(state.clone(), Disposition::PASS)
    }
}
