//! Combobox interaction handlers
//!
//! One async handler per event source. Each one follows the same protocol:
//! guard on the event, batch the open/close/focus changes, consult the gate
//! hooks (`check_if_listbox_can_open`, then `prepare_options`), update the
//! active option, fire the side-effect hooks and return the settled state.
//!
//! Keyboard behavior follows the WAI-ARIA combobox patterns:
//! - `list`: <https://www.w3.org/WAI/ARIA/apg/patterns/combobox/examples/combobox-autocomplete-list/#kbd_label>
//! - `both`: <https://www.w3.org/WAI/ARIA/apg/patterns/combobox/examples/combobox-autocomplete-both/#kbd_label>
//! - `none`: <https://www.w3.org/WAI/ARIA/apg/patterns/combobox/examples/combobox-autocomplete-none/#kbd_label>
//!
//! Handlers keep no state between calls. Overlapping invocations (a second
//! keystroke arriving while a slow `prepare_options` is pending) each work on
//! the state they were given; hosts that fire input handlers rapidly should
//! serialize or debounce them (see `aria_utils::debounce`).
//!
//! # Example
//!
//! ```ignore
//! use aria_core::prelude::*;
//!
//! let handled = combobox::handle_combobox_key_down(
//!     &state,
//!     &KeyEvent::new(Key::from_dom_key("ArrowDown")),
//!     &current_text,
//!     &hooks,
//! )
//! .await?;
//!
//! if handled.disposition.prevent_default {
//!     native_event.prevent_default();
//! }
//! state = handled.state;
//! ```

mod transitions;


use crate::behavior::behavior;
use crate::environment::Environment;
use crate::error::Result;
use crate::events::{Disposition, Handled, InputKind, Key, KeyEvent};
use crate::hooks::ComboboxHooks;
use crate::reason::Reason;
use crate::state::{ComboboxState, FocusTarget, StatePatch};

use transitions::{
    activate_matching_option, claim_focus, commit, update_state_on_close, update_state_on_open,
    update_state_on_remove_visual_focus, ComboboxBatch,
};

/// Text was inserted into or deleted from the combobox
///
/// Other input kinds (composition, history...) are left to the platform.
/// Opens the listbox when the host allows it, re-queries the active option
/// and, in inline modes, asks for an inline suggestion after insertions.
pub async fn handle_combobox_input(
    state: &ComboboxState,
    kind: InputKind,
    hooks: &ComboboxHooks,
) -> Result<Handled> {
    let reason = match kind {
        InputKind::Insert => Reason::InputInsert,
        InputKind::Delete => Reason::InputDelete,
        InputKind::Other => return Ok(Handled::ignored(state)),
    };

    let mut batch = ComboboxBatch::new(state);
    claim_focus(&mut batch, FocusTarget::Combobox);
    if hooks.check_if_listbox_can_open(reason).await? {
        update_state_on_open(&mut batch);
    } else {
        update_state_on_close(&mut batch, true);
    }
    let state = commit(batch, hooks, reason).await?;

    if state.is_listbox_open && !hooks.call_prepare_options(reason).await? {
        return Ok(Handled::new(state, Disposition::PREVENT));
    }

    // A closed listbox never holds an active option, whatever the mode.
    let state = if state.is_listbox_open {
        activate_matching_option(state, hooks, reason).await?.0
    } else {
        state
    };

    if behavior(&state).can_show_inline_suggestions
        && kind == InputKind::Insert
        && state.active_option.is_some()
        && hooks.has_show_inline_suggestion()
    {
        hooks.call_show_inline_suggestion(reason).await?;
    }

    Ok(Handled::new(state, Disposition::PREVENT))
}

/// Key pressed while the combobox has DOM focus
///
/// `value` is the current text of the combobox. Presses with ctrl held, or
/// with shift held on anything but Tab, are ignored.
pub async fn handle_combobox_key_down(
    state: &ComboboxState,
    event: &KeyEvent,
    value: &str,
    hooks: &ComboboxHooks,
) -> Result<Handled> {
    if event.ctrl || (event.shift && event.key != Key::Tab) {
        return Ok(Handled::ignored(state));
    }

    match event.key {
        Key::Enter => on_enter(state, hooks).await,
        Key::ArrowDown => on_arrow(state, Direction::Down, event.alt, hooks).await,
        Key::ArrowUp => on_arrow(state, Direction::Up, event.alt, hooks).await,
        Key::Escape => on_escape(state, value, hooks).await,
        Key::Tab => on_tab(state, hooks).await,
        Key::Character(_) | Key::Other(_) => Ok(Handled::ignored(state)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    fn reason(self) -> Reason {
        match self {
            Direction::Down => Reason::KeyArrowDown,
            Direction::Up => Reason::KeyArrowUp,
        }
    }
}

async fn on_enter(state: &ComboboxState, hooks: &ComboboxHooks) -> Result<Handled> {
    let reason = Reason::KeyEnter;
    // A closed listbox must not swallow form submission.
    let prevent = state.is_listbox_open;

    let mut batch = ComboboxBatch::new(state);
    update_state_on_close(&mut batch, true);
    claim_focus(&mut batch, FocusTarget::Combobox);
    if let Some(option) = &state.active_option {
        hooks.call_set_combobox_value(option.clone(), reason).await?;
    }
    hooks.call_commit_value(reason).await?;
    let state = commit(batch, hooks, reason).await?;

    Ok(Handled::new(state, Disposition::prevent_if(prevent)))
}

async fn on_arrow(
    state: &ComboboxState,
    direction: Direction,
    alt: bool,
    hooks: &ComboboxHooks,
) -> Result<Handled> {
    let reason = direction.reason();
    let mut state = state.clone();
    let mut active_changed = false;

    if !state.is_listbox_open {
        if !hooks.check_if_listbox_can_open(reason).await? {
            tracing::debug!(%reason, "listbox cannot open");
            return Ok(Handled::new(state, Disposition::PREVENT));
        }

        let mut batch = ComboboxBatch::new(&state);
        update_state_on_open(&mut batch);
        state = commit(batch, hooks, reason).await?;

        // Alt+Arrow opens without moving the active option.
        if !hooks.call_prepare_options(reason).await? || alt {
            return Ok(Handled::new(state, Disposition::PREVENT));
        }

        let (activated, changed) = activate_matching_option(state, hooks, reason).await?;
        state = activated;
        active_changed = changed;
    }

    let mut batch = ComboboxBatch::new(&state);
    claim_focus(&mut batch, FocusTarget::Listbox);
    let current = state.active_option.clone();
    let candidate = match direction {
        Direction::Down => hooks.get_next_option(current.clone(), reason).await?,
        Direction::Up => hooks.get_previous_option(current.clone(), reason).await?,
    };
    if let Some(candidate) = candidate {
        if current.as_deref() != Some(candidate.as_str()) {
            batch.update(StatePatch::active_option(Some(candidate)));
            active_changed = true;
        }
    }
    let state = commit(batch, hooks, reason).await?;

    if behavior(&state).can_show_inline_suggestions && active_changed {
        if let Some(active) = &state.active_option {
            hooks.call_set_combobox_value(active.clone(), reason).await?;
        }
    }

    Ok(Handled::new(state, Disposition::PREVENT))
}

async fn on_escape(state: &ComboboxState, value: &str, hooks: &ComboboxHooks) -> Result<Handled> {
    let reason = Reason::KeyEscape;

    let mut batch = ComboboxBatch::new(state);
    if state.is_listbox_open {
        update_state_on_close(&mut batch, true);
        claim_focus(&mut batch, FocusTarget::Combobox);
    } else if !value.is_empty() {
        hooks.call_set_combobox_value(String::new(), reason).await?;
        hooks.call_commit_value(reason).await?;
    }
    let state = commit(batch, hooks, reason).await?;

    Ok(Handled::new(state, Disposition::PREVENT))
}

async fn on_tab(state: &ComboboxState, hooks: &ComboboxHooks) -> Result<Handled> {
    let reason = Reason::KeyTab;

    let mut batch = ComboboxBatch::new(state);
    update_state_on_close(&mut batch, true);
    if let Some(option) = &state.active_option {
        hooks.call_set_combobox_value(option.clone(), reason).await?;
    }
    hooks.call_commit_value(reason).await?;
    let state = commit(batch, hooks, reason).await?;

    // Focus must be allowed to leave the widget.
    Ok(Handled::new(state, Disposition::PASS))
}

/// The combobox received DOM focus: it takes visual focus
pub async fn handle_combobox_focus(
    _state: &ComboboxState,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    hooks
        .update_state(
            StatePatch::focus(Some(FocusTarget::Combobox)),
            Reason::ComboboxFocus,
        )
        .await
}

/// The combobox input was clicked
///
/// Opens the listbox if allowed, takes visual focus and activates the option
/// matching the current text.
pub async fn handle_combobox_click(
    state: &ComboboxState,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    let reason = Reason::ComboboxClick;

    let mut batch = ComboboxBatch::new(state);
    if !state.is_listbox_open && hooks.check_if_listbox_can_open(reason).await? {
        update_state_on_open(&mut batch);
    }
    claim_focus(&mut batch, FocusTarget::Combobox);
    let state = commit(batch, hooks, reason).await?;

    if !state.is_listbox_open || !hooks.call_prepare_options(reason).await? {
        return Ok(state);
    }

    Ok(activate_matching_option(state, hooks, reason).await?.0)
}

/// Native change events of the combobox input are swallowed; committing is
/// signalled through the `commit_value` hook instead.
pub fn handle_combobox_change() -> Disposition {
    Disposition::SUPPRESS
}

/// The toggle button was clicked: closes an open listbox, otherwise opens it
/// (if allowed) and moves DOM focus to the combobox.
pub async fn handle_button_click(
    state: &ComboboxState,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    let reason = Reason::ButtonClick;

    let mut batch = ComboboxBatch::new(state);
    if state.is_listbox_open {
        update_state_on_close(&mut batch, true);
    } else if hooks.check_if_listbox_can_open(reason).await? {
        update_state_on_open(&mut batch);
        claim_focus(&mut batch, FocusTarget::Combobox);
        hooks.call_focus_combobox(reason).await?;
    }
    let state = commit(batch, hooks, reason).await?;

    if !state.is_listbox_open || !hooks.call_prepare_options(reason).await? {
        return Ok(state);
    }

    Ok(activate_matching_option(state, hooks, reason).await?.0)
}

/// Focus left the widget root
///
/// Nothing happens while the document is unfocused or the pointer is still
/// over the widget. Otherwise the listbox closes unless one of its parts keeps
/// visual focus, and the value is committed.
pub async fn handle_root_focus_out<E: Environment>(
    state: &ComboboxState,
    env: &E,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    if !env.document_has_focus() || env.root_has_pointer() {
        return Ok(state.clone());
    }

    let reason = Reason::RootFocusOut;
    let mut batch = ComboboxBatch::new(state);
    update_state_on_close(&mut batch, false);
    hooks.call_commit_value(reason).await?;
    commit(batch, hooks, reason).await
}

/// An option was clicked: choose it, close the listbox and give focus back to
/// the combobox.
pub async fn handle_option_click(
    state: &ComboboxState,
    option: &str,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    let reason = Reason::OptionClick;

    let mut batch = ComboboxBatch::new(state);
    update_state_on_close(&mut batch, true);
    claim_focus(&mut batch, FocusTarget::Combobox);
    hooks.call_focus_combobox(reason).await?;
    hooks.call_set_combobox_value(option.to_string(), reason).await?;
    hooks.call_commit_value(reason).await?;
    commit(batch, hooks, reason).await
}

/// Pointer released somewhere on the page
///
/// When the target lies outside the widget root, visual focus is dropped and
/// the listbox is closed.
pub async fn handle_background_pointer_up<E: Environment>(
    state: &ComboboxState,
    target: &E::Target,
    env: &E,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    if env.root_contains(target) {
        return Ok(state.clone());
    }

    let reason = Reason::BackgroundPointerUp;
    let mut batch = ComboboxBatch::new(state);
    update_state_on_remove_visual_focus(&mut batch);
    update_state_on_close(&mut batch, true);
    commit(batch, hooks, reason).await
}

/// Programmatically open the listbox, gated like any user-triggered opening
pub async fn open(state: &ComboboxState, hooks: &ComboboxHooks) -> Result<ComboboxState> {
    let reason = Reason::Open;

    if !hooks.check_if_listbox_can_open(reason).await? {
        return Ok(state.clone());
    }

    let mut batch = ComboboxBatch::new(state);
    update_state_on_open(&mut batch);
    let state = commit(batch, hooks, reason).await?;

    if !hooks.call_prepare_options(reason).await? {
        return Ok(state);
    }

    Ok(activate_matching_option(state, hooks, reason).await?.0)
}

/// Programmatically close the listbox
///
/// Without `force` the listbox stays open while one of its parts holds visual
/// focus.
pub async fn close(
    state: &ComboboxState,
    force: bool,
    hooks: &ComboboxHooks,
) -> Result<ComboboxState> {
    let mut batch = ComboboxBatch::new(state);
    update_state_on_close(&mut batch, force);
    commit(batch, hooks, Reason::Close).await
}
