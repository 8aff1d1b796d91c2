//! Dialog / modal open-close state
//!
//! A two-state model driven through the same `update_state` hook pattern as the
//! combobox. The engine shows the element on open; closing the actual element
//! is left to the host so exit animations can run first.
//!
//! # Example
//!
//! ```ignore
//! use aria_core::dialog::{self, DialogHooks, DialogState};
//!
//! let hooks = DialogHooks::new(move |patch, reason| {
//!     let store = store.clone();
//!     async move { Ok(store.apply(patch, reason)) }
//! });
//!
//! // From a button on_click
//! state = dialog::open(&state, &mut element, true, &hooks).await?;
//!
//! // Alert dialogs only differ in their role
//! let attrs = dialog::a11y_attributes(true);
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::batch::{Patch, StateBatch};
use crate::error::Result;
use crate::hooks::HookFuture;

/// Open/closed state of a dialog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogState {
    pub is_open: bool,
}

/// Partial update of a [`DialogState`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogPatch {
    pub is_open: Option<bool>,
}

impl Patch for DialogPatch {
    type State = DialogState;

    fn is_empty(&self) -> bool {
        self.is_open.is_none()
    }

    fn merge(&mut self, later: Self) {
        if later.is_open.is_some() {
            self.is_open = later.is_open;
        }
    }

    fn apply(&self, state: &DialogState) -> DialogState {
        DialogState {
            is_open: self.is_open.unwrap_or(state.is_open),
        }
    }
}

/// Why the dialog `update_state` hook is being called
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogReason {
    Open,
    Close,
}

impl DialogReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogReason::Open => "open",
            DialogReason::Close => "close",
        }
    }
}

impl fmt::Display for DialogReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type DialogUpdateHook = Arc<dyn Fn(DialogPatch, DialogReason) -> HookFuture<DialogState> + Send + Sync>;

/// Hooks for the dialog engine
#[derive(Clone)]
pub struct DialogHooks {
    update_state: DialogUpdateHook,
}

impl DialogHooks {
    /// `update_state` applies the patch and returns the new settled state. It
    /// is only called when a value actually changes.
    pub fn new<F, Fut>(update_state: F) -> Self
    where
        F: Fn(DialogPatch, DialogReason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<DialogState>> + Send + 'static,
    {
        Self {
            update_state: Arc::new(move |patch, reason| update_state(patch, reason).boxed()),
        }
    }

    async fn update_state(&self, patch: DialogPatch, reason: DialogReason) -> Result<DialogState> {
        tracing::debug!(%reason, ?patch, "dialog update_state");
        (self.update_state)(patch, reason).await
    }
}

impl fmt::Debug for DialogHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogHooks").finish_non_exhaustive()
    }
}

/// The platform dialog element
pub trait DialogElement {
    /// Whether the element is currently shown
    fn is_open(&self) -> bool;

    /// Show the element as a non-modal dialog
    fn show(&mut self);

    /// Show the element as a modal dialog (backdrop, inert background)
    fn show_modal(&mut self);
}

/// Programmatically open the dialog
///
/// When `modal` is set the element is shown as a modal dialog. An element that
/// is already shown is left alone and only the state is synced.
pub async fn open<D: DialogElement>(
    state: &DialogState,
    element: &mut D,
    modal: bool,
    hooks: &DialogHooks,
) -> Result<DialogState> {
    if state.is_open {
        return Ok(*state);
    }

    if !element.is_open() {
        if modal {
            element.show_modal();
        } else {
            element.show();
        }
    }

    let mut batch = StateBatch::<DialogPatch>::new(state);
    batch.update(DialogPatch {
        is_open: Some(true),
    });
    batch
        .commit(|patch| hooks.update_state(patch, DialogReason::Open))
        .await
}

/// Programmatically close the dialog
///
/// Only the state is updated; the host closes the element itself once its
/// exit animation is done.
pub async fn close(state: &DialogState, hooks: &DialogHooks) -> Result<DialogState> {
    let mut batch = StateBatch::<DialogPatch>::new(state);
    if state.is_open {
        batch.update(DialogPatch {
            is_open: Some(false),
        });
    }
    batch
        .commit(|patch| hooks.update_state(patch, DialogReason::Close))
        .await
}

/// React to the element's native `close` event (Escape, form submission...)
pub async fn handle_close(state: &DialogState, hooks: &DialogHooks) -> Result<DialogState> {
    close(state, hooks).await
}

/// ARIA role of a dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogRole {
    Dialog,
    #[serde(rename = "alertdialog")]
    AlertDialog,
}

impl DialogRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogRole::Dialog => "dialog",
            DialogRole::AlertDialog => "alertdialog",
        }
    }
}

/// Attribute values for the dialog element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DialogA11y {
    pub role: DialogRole,
}

/// Attributes for a dialog; `alert` selects the `alertdialog` role
pub fn a11y_attributes(alert: bool) -> DialogA11y {
    DialogA11y {
        role: if alert {
            DialogRole::AlertDialog
        } else {
            DialogRole::Dialog
        },
    }
}
