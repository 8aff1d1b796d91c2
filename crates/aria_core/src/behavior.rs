//! Capabilities derived from the autocomplete mode

use crate::state::{Autocomplete, ComboboxState};

/// What a combobox may do for its configured autocomplete mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Behavior {
    /// When `true` the listbox options follow the user input; when `false` the
    /// listbox shows a static set of options.
    pub can_filter_options_in_listbox: bool,
    /// When `true` the active option is written into the combobox and inline
    /// suggestions are shown while typing; when `false` the user input is kept
    /// as typed until an option is chosen.
    pub can_show_inline_suggestions: bool,
}

impl Autocomplete {
    /// Capability table for this mode
    pub fn behavior(self) -> Behavior {
        Behavior {
            can_filter_options_in_listbox: matches!(self, Autocomplete::List | Autocomplete::Both),
            can_show_inline_suggestions: matches!(self, Autocomplete::Both | Autocomplete::Inline),
        }
    }
}

/// Capabilities for the given state
pub fn behavior(state: &ComboboxState) -> Behavior {
    state.autocomplete.behavior()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_table() {
        let cases = [
            (Autocomplete::None, false, false),
            (Autocomplete::List, true, false),
            (Autocomplete::Both, true, true),
            (Autocomplete::Inline, false, true),
        ];
        for (mode, filter, inline) in cases {
            let b = behavior(&ComboboxState::new(mode));
            assert_eq!(b.can_filter_options_in_listbox, filter, "{mode}");
            assert_eq!(b.can_show_inline_suggestions, inline, "{mode}");
        }
    }
}
