//! ARIA attribute values for the combobox parts
//!
//! Pure mapping from state to attribute values. Nothing is written here; the
//! host applies the values to its elements (or serializes them, the serde form
//! uses the real attribute names).

use serde::Serialize;

use crate::state::ComboboxState;

/// ARIA boolean attribute value (`"true"` / `"false"`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AriaBool {
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
}

impl AriaBool {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaBool::True => "true",
            AriaBool::False => "false",
        }
    }
}

impl From<bool> for AriaBool {
    fn from(value: bool) -> Self {
        if value {
            AriaBool::True
        } else {
            AriaBool::False
        }
    }
}

/// Attributes for the toggle button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonAttributes {
    #[serde(rename = "aria-expanded")]
    pub aria_expanded: AriaBool,
}

/// Attributes for the combobox input
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComboboxAttributes {
    #[serde(rename = "aria-expanded")]
    pub aria_expanded: AriaBool,
    /// Id of the active option element, empty when there is none to announce
    #[serde(rename = "aria-activedescendant")]
    pub aria_activedescendant: String,
}

/// Attributes for an option element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionAttributes {
    #[serde(rename = "aria-selected")]
    pub aria_selected: AriaBool,
}

/// Attribute values for every combobox part
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboboxA11y {
    pub button: ButtonAttributes,
    pub combobox: ComboboxAttributes,
    /// To apply on the active option
    pub active_option: OptionAttributes,
    /// To apply on every other option
    pub other_options: OptionAttributes,
}

/// Attribute values for the given state
///
/// `active_option_id` is the element id of the active option, if the host has
/// one. `aria-activedescendant` stays empty while the listbox is closed.
pub fn a11y_attributes(state: &ComboboxState, active_option_id: Option<&str>) -> ComboboxA11y {
    let expanded = AriaBool::from(state.is_listbox_open);
    let activedescendant = match active_option_id {
        Some(id) if state.is_listbox_open => id.to_string(),
        _ => String::new(),
    };

    ComboboxA11y {
        button: ButtonAttributes {
            aria_expanded: expanded,
        },
        combobox: ComboboxAttributes {
            aria_expanded: expanded,
            aria_activedescendant: activedescendant,
        },
        active_option: OptionAttributes {
            aria_selected: AriaBool::True,
        },
        other_options: OptionAttributes {
            aria_selected: AriaBool::False,
        },
    }
}

impl ComboboxAttributes {
    /// `(name, value)` pairs for hosts that set attributes by name
    pub fn attributes(&self) -> [(&'static str, String); 2] {
        [
            ("aria-expanded", self.aria_expanded.as_str().to_string()),
            ("aria-activedescendant", self.aria_activedescendant.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Autocomplete;

    fn open_state() -> ComboboxState {
        ComboboxState {
            is_listbox_open: true,
            active_option: Some("Texas".into()),
            ..ComboboxState::new(Autocomplete::List)
        }
    }

    #[test]
    fn test_closed_listbox_has_no_activedescendant() {
        let state = ComboboxState::new(Autocomplete::List);
        let attrs = a11y_attributes(&state, Some("option-texas"));
        assert_eq!(attrs.combobox.aria_activedescendant, "");
        assert_eq!(attrs.combobox.aria_expanded, AriaBool::False);
        assert_eq!(attrs.button.aria_expanded, AriaBool::False);
    }

    #[test]
    fn test_open_listbox_points_at_active_option() {
        let attrs = a11y_attributes(&open_state(), Some("option-texas"));
        assert_eq!(attrs.combobox.aria_activedescendant, "option-texas");
        assert_eq!(attrs.combobox.aria_expanded, AriaBool::True);

        let attrs = a11y_attributes(&open_state(), None);
        assert_eq!(attrs.combobox.aria_activedescendant, "");
    }

    #[test]
    fn test_serialized_attribute_names() {
        let attrs = a11y_attributes(&open_state(), Some("opt-1"));
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["combobox"]["aria-expanded"], "true");
        assert_eq!(json["combobox"]["aria-activedescendant"], "opt-1");
        assert_eq!(json["activeOption"]["aria-selected"], "true");
        assert_eq!(json["otherOptions"]["aria-selected"], "false");
        assert_eq!(json["button"]["aria-expanded"], "true");
    }

    #[test]
    fn test_named_attributes() {
        let attrs = a11y_attributes(&open_state(), Some("opt-1"));
        assert_eq!(
            attrs.combobox.attributes(),
            [
                ("aria-expanded", "true".to_string()),
                ("aria-activedescendant", "opt-1".to_string()),
            ]
        );
    }
}
