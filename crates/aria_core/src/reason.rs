//! Transition reasons
//!
//! Every hook call carries the reason it was made for, so host logic can tell
//! causes apart without diffing states. The string form of each reason is part
//! of the public contract and must stay stable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a combobox hook is being called
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "combobox input: insert")]
    InputInsert,
    #[serde(rename = "combobox input: delete")]
    InputDelete,
    #[serde(rename = "combobox keydown: ArrowDown")]
    KeyArrowDown,
    #[serde(rename = "combobox keydown: ArrowDown: filter match")]
    KeyArrowDownFilterMatch,
    #[serde(rename = "combobox keydown: ArrowDown: filter doesnt match")]
    KeyArrowDownFilterMiss,
    #[serde(rename = "combobox keydown: ArrowUp")]
    KeyArrowUp,
    #[serde(rename = "combobox keydown: ArrowUp: filter match")]
    KeyArrowUpFilterMatch,
    #[serde(rename = "combobox keydown: ArrowUp: filter doesnt match")]
    KeyArrowUpFilterMiss,
    #[serde(rename = "combobox keydown: Enter")]
    KeyEnter,
    #[serde(rename = "combobox keydown: Esc")]
    KeyEscape,
    #[serde(rename = "combobox keydown: Tab")]
    KeyTab,
    #[serde(rename = "combobox focus")]
    ComboboxFocus,
    #[serde(rename = "combobox click")]
    ComboboxClick,
    #[serde(rename = "combobox click: filter match")]
    ComboboxClickFilterMatch,
    #[serde(rename = "combobox click: filter doesnt match")]
    ComboboxClickFilterMiss,
    #[serde(rename = "button click")]
    ButtonClick,
    #[serde(rename = "button click: filter match")]
    ButtonClickFilterMatch,
    #[serde(rename = "button click: filter doesnt match")]
    ButtonClickFilterMiss,
    #[serde(rename = "option click")]
    OptionClick,
    #[serde(rename = "root focusout")]
    RootFocusOut,
    #[serde(rename = "background pointerup")]
    BackgroundPointerUp,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "open: filter match")]
    OpenFilterMatch,
    #[serde(rename = "open: filter doesnt match")]
    OpenFilterMiss,
    #[serde(rename = "close")]
    Close,
}

impl Reason {
    /// Stable string tag for this reason
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::InputInsert => "combobox input: insert",
            Reason::InputDelete => "combobox input: delete",
            Reason::KeyArrowDown => "combobox keydown: ArrowDown",
            Reason::KeyArrowDownFilterMatch => "combobox keydown: ArrowDown: filter match",
            Reason::KeyArrowDownFilterMiss => "combobox keydown: ArrowDown: filter doesnt match",
            Reason::KeyArrowUp => "combobox keydown: ArrowUp",
            Reason::KeyArrowUpFilterMatch => "combobox keydown: ArrowUp: filter match",
            Reason::KeyArrowUpFilterMiss => "combobox keydown: ArrowUp: filter doesnt match",
            Reason::KeyEnter => "combobox keydown: Enter",
            Reason::KeyEscape => "combobox keydown: Esc",
            Reason::KeyTab => "combobox keydown: Tab",
            Reason::ComboboxFocus => "combobox focus",
            Reason::ComboboxClick => "combobox click",
            Reason::ComboboxClickFilterMatch => "combobox click: filter match",
            Reason::ComboboxClickFilterMiss => "combobox click: filter doesnt match",
            Reason::ButtonClick => "button click",
            Reason::ButtonClickFilterMatch => "button click: filter match",
            Reason::ButtonClickFilterMiss => "button click: filter doesnt match",
            Reason::OptionClick => "option click",
            Reason::RootFocusOut => "root focusout",
            Reason::BackgroundPointerUp => "background pointerup",
            Reason::Open => "open",
            Reason::OpenFilterMatch => "open: filter match",
            Reason::OpenFilterMiss => "open: filter doesnt match",
            Reason::Close => "close",
        }
    }

    /// The reason reported when `find_option_to_activate` changes the active
    /// option: the "filter match" variant when an option was found, the
    /// "filter doesnt match" variant otherwise. Reasons without such variants
    /// are returned unchanged.
    pub fn filter_outcome(self, matched: bool) -> Reason {
        match (self, matched) {
            (Reason::KeyArrowDown, true) => Reason::KeyArrowDownFilterMatch,
            (Reason::KeyArrowDown, false) => Reason::KeyArrowDownFilterMiss,
            (Reason::KeyArrowUp, true) => Reason::KeyArrowUpFilterMatch,
            (Reason::KeyArrowUp, false) => Reason::KeyArrowUpFilterMiss,
            (Reason::ComboboxClick, true) => Reason::ComboboxClickFilterMatch,
            (Reason::ComboboxClick, false) => Reason::ComboboxClickFilterMiss,
            (Reason::ButtonClick, true) => Reason::ButtonClickFilterMatch,
            (Reason::ButtonClick, false) => Reason::ButtonClickFilterMiss,
            (Reason::Open, true) => Reason::OpenFilterMatch,
            (Reason::Open, false) => Reason::OpenFilterMiss,
            (other, _) => other,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
