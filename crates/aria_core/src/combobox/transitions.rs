//! Open/close and focus transitions
//!
//! These are the only places that write `is_listbox_open` and
//! `element_with_focus`. They record patches into the handler's batch and
//! check the batch view, so a later step in the same operation sees the
//! effect of an earlier one.
//!
//! ```text
//!                 open                       claim(Combobox)
//!   Closed ──────────────▶ OpenUnfocused ─────────────────▶ OpenComboboxFocused
//!     ▲                        │   ▲                              │
//!     │ close(force)           │   └──── claim(Listbox) ◀─────────┘
//!     │ close(unfocused)       ▼
//!     └──────────────── OpenListboxFocused
//! ```

use crate::batch::StateBatch;
use crate::error::Result;
use crate::hooks::ComboboxHooks;
use crate::reason::Reason;
use crate::state::{ComboboxState, FocusTarget, StatePatch};

pub(crate) type ComboboxBatch = StateBatch<StatePatch>;

/// Open the listbox if it is not open yet
pub(crate) fn update_state_on_open(batch: &mut ComboboxBatch) {
    if !batch.view().is_listbox_open {
        batch.update(StatePatch::listbox_open(true));
    }
}

/// Close the listbox when it is open and either `force` is set or neither
/// part holds visual focus. Closing always drops focus and the active option.
pub(crate) fn update_state_on_close(batch: &mut ComboboxBatch, force: bool) {
    let view = batch.view();
    if view.is_listbox_open && (force || view.element_with_focus.is_none()) {
        batch.update(StatePatch {
            is_listbox_open: Some(false),
            element_with_focus: Some(None),
            active_option: Some(None),
        });
    }
}

/// Give visual focus to `target` unless it already has it
pub(crate) fn claim_focus(batch: &mut ComboboxBatch, target: FocusTarget) {
    if !batch.view().has_focus(target) {
        batch.update(StatePatch::focus(Some(target)));
    }
}

/// Take visual focus away from both parts
pub(crate) fn update_state_on_remove_visual_focus(batch: &mut ComboboxBatch) {
    if batch.view().element_with_focus.is_some() {
        batch.update(StatePatch::focus(None));
    }
}

/// Commit the batch through the host's `update_state` hook
pub(crate) async fn commit(
    batch: ComboboxBatch,
    hooks: &ComboboxHooks,
    reason: Reason,
) -> Result<ComboboxState> {
    batch
        .commit(|patch| hooks.update_state(patch, reason))
        .await
}

/// Ask `find_option_to_activate` for the option matching the user input and
/// commit it right away when it differs from the current one.
///
/// Returns the settled state and whether the active option changed.
pub(crate) async fn activate_matching_option(
    state: ComboboxState,
    hooks: &ComboboxHooks,
    reason: Reason,
) -> Result<(ComboboxState, bool)> {
    let Some(found) = hooks.call_find_option_to_activate(reason).await? else {
        return Ok((state, false));
    };
    if state.active_option == found {
        return Ok((state, false));
    }

    let reason = reason.filter_outcome(found.is_some());
    let state = hooks
        .update_state(StatePatch::active_option(found), reason)
        .await?;
    Ok((state, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Patch;
    use crate::state::Autocomplete;

    fn state(open: bool, focus: Option<FocusTarget>, active: Option<&str>) -> ComboboxState {
        ComboboxState {
            autocomplete: Autocomplete::List,
            is_listbox_open: open,
            element_with_focus: focus,
            active_option: active.map(str::to_string),
        }
    }

    #[test]
    fn test_forced_close_resets_everything() {
        let all_focus = [None, Some(FocusTarget::Combobox), Some(FocusTarget::Listbox)];
        for focus in all_focus {
            for active in [None, Some("Utah")] {
                let start = state(true, focus, active);
                let mut batch = ComboboxBatch::new(&start);
                update_state_on_close(&mut batch, true);
                let closed = batch.pending().apply(&start);
                assert_eq!(closed, state(false, None, None));
            }
        }
    }

    #[test]
    fn test_unforced_close_respects_visual_focus() {
        for focus in [FocusTarget::Combobox, FocusTarget::Listbox] {
            let start = state(true, Some(focus), Some("Utah"));
            let mut batch = ComboboxBatch::new(&start);
            update_state_on_close(&mut batch, false);
            assert!(!batch.is_updated());
        }

        let start = state(true, None, Some("Utah"));
        let mut batch = ComboboxBatch::new(&start);
        update_state_on_close(&mut batch, false);
        assert!(!batch.view().is_listbox_open);
    }

    #[test]
    fn test_close_on_closed_listbox_is_noop() {
        let start = state(false, Some(FocusTarget::Combobox), None);
        let mut batch = ComboboxBatch::new(&start);
        update_state_on_close(&mut batch, true);
        assert!(!batch.is_updated());
    }

    #[test]
    fn test_open_is_idempotent() {
        let start = state(true, None, None);
        let mut batch = ComboboxBatch::new(&start);
        update_state_on_open(&mut batch);
        assert!(!batch.is_updated());
    }

    #[test]
    fn test_claim_after_close_sees_the_close() {
        let start = state(true, Some(FocusTarget::Combobox), Some("Utah"));
        let mut batch = ComboboxBatch::new(&start);
        update_state_on_close(&mut batch, true);
        claim_focus(&mut batch, FocusTarget::Combobox);
        assert_eq!(
            batch.view(),
            &state(false, Some(FocusTarget::Combobox), None)
        );
    }
}
