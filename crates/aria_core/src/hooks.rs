//! Combobox hook contract
//!
//! The engine decides *when* things happen; the host decides *what* happens
//! through these async callbacks. Required hooks are passed to
//! [`ComboboxHooks::new`], optional ones are attached with builder methods.
//! Absent optional hooks behave as documented on each setter.
//!
//! # Example
//!
//! ```ignore
//! use aria_core::prelude::*;
//!
//! let hooks = ComboboxHooks::new(
//!     move |patch, _reason| {
//!         let store = store.clone();
//!         async move { Ok(store.apply(patch)) }
//!     },
//!     |_reason| async { Ok(true) },
//!     |current, _reason| async move { Ok(next_after(current)) },
//!     |current, _reason| async move { Ok(previous_before(current)) },
//! )
//! .commit_value(|reason| async move {
//!     tracing::info!(%reason, "value committed");
//!     Ok(())
//! });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::Result;
use crate::reason::Reason;
use crate::state::{ComboboxState, StatePatch};

/// Future returned by every hook
pub type HookFuture<T> = BoxFuture<'static, Result<T>>;

type ReasonHook<T> = Arc<dyn Fn(Reason) -> HookFuture<T> + Send + Sync>;
type UpdateStateHook = Arc<dyn Fn(StatePatch, Reason) -> HookFuture<ComboboxState> + Send + Sync>;
type OptionHook = Arc<dyn Fn(Option<String>, Reason) -> HookFuture<Option<String>> + Send + Sync>;
type ValueHook = Arc<dyn Fn(String, Reason) -> HookFuture<()> + Send + Sync>;

fn reason_hook<T, F, Fut>(f: F) -> ReasonHook<T>
where
    F: Fn(Reason) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move |reason| f(reason).boxed())
}

fn option_hook<F, Fut>(f: F) -> OptionHook
where
    F: Fn(Option<String>, Reason) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<String>>> + Send + 'static,
{
    Arc::new(move |option, reason| f(option, reason).boxed())
}

/// Capability set the combobox engine depends on
#[derive(Clone)]
pub struct ComboboxHooks {
    update_state: UpdateStateHook,
    check_if_listbox_can_open: ReasonHook<bool>,
    get_next_option: OptionHook,
    get_previous_option: OptionHook,
    prepare_options: Option<ReasonHook<bool>>,
    find_option_to_activate: Option<ReasonHook<Option<String>>>,
    set_combobox_value: Option<ValueHook>,
    focus_combobox: Option<ReasonHook<()>>,
    show_inline_suggestion: Option<ReasonHook<()>>,
    commit_value: Option<ReasonHook<()>>,
}

impl fmt::Debug for ComboboxHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxHooks")
            .field("prepare_options", &self.prepare_options.is_some())
            .field(
                "find_option_to_activate",
                &self.find_option_to_activate.is_some(),
            )
            .field("set_combobox_value", &self.set_combobox_value.is_some())
            .field("focus_combobox", &self.focus_combobox.is_some())
            .field(
                "show_inline_suggestion",
                &self.show_inline_suggestion.is_some(),
            )
            .field("commit_value", &self.commit_value.is_some())
            .finish_non_exhaustive()
    }
}

impl ComboboxHooks {
    /// Create the hook set from the four required hooks
    ///
    /// - `update_state`: apply a patch and return the new settled state. The
    ///   only channel through which the state changes; it is called with the
    ///   changed fields only.
    /// - `check_if_listbox_can_open`: gate for every opening transition. When
    ///   it answers `false` everything that depends on the listbox being open is
    ///   skipped.
    /// - `get_next_option` / `get_previous_option`: list traversal relative to
    ///   the current active option (`None` when nothing is active). Wraparound
    ///   and filtering are up to the host; `None` means "no move".
    pub fn new<U, UFut, C, CFut, N, NFut, P, PFut>(
        update_state: U,
        check_if_listbox_can_open: C,
        get_next_option: N,
        get_previous_option: P,
    ) -> Self
    where
        U: Fn(StatePatch, Reason) -> UFut + Send + Sync + 'static,
        UFut: Future<Output = Result<ComboboxState>> + Send + 'static,
        C: Fn(Reason) -> CFut + Send + Sync + 'static,
        CFut: Future<Output = Result<bool>> + Send + 'static,
        N: Fn(Option<String>, Reason) -> NFut + Send + Sync + 'static,
        NFut: Future<Output = Result<Option<String>>> + Send + 'static,
        P: Fn(Option<String>, Reason) -> PFut + Send + Sync + 'static,
        PFut: Future<Output = Result<Option<String>>> + Send + 'static,
    {
        Self {
            update_state: Arc::new(move |patch, reason| update_state(patch, reason).boxed()),
            check_if_listbox_can_open: reason_hook(check_if_listbox_can_open),
            get_next_option: option_hook(get_next_option),
            get_previous_option: option_hook(get_previous_option),
            prepare_options: None,
            find_option_to_activate: None,
            set_combobox_value: None,
            focus_combobox: None,
            show_inline_suggestion: None,
            commit_value: None,
        }
    }

    /// Called before any option-dependent logic, e.g. to fetch or filter the
    /// options. Answer `false` when the options are not usable (network error,
    /// nothing matches); the listbox is *not* closed automatically so the host
    /// can show a message in it.
    ///
    /// Treated as `true` when absent.
    pub fn prepare_options<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool>> + Send + 'static,
    {
        self.prepare_options = Some(reason_hook(f));
        self
    }

    /// Find the option matching the current user input when the listbox opens
    /// or the text changes. Its answer (including `None`) replaces the active
    /// option. When absent the active option is left alone.
    pub fn find_option_to_activate<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<String>>> + Send + 'static,
    {
        self.find_option_to_activate = Some(reason_hook(f));
        self
    }

    /// Write a value into the combobox text field: the chosen option, the
    /// option being navigated in inline modes, or an empty string when the user
    /// clears the field with Escape.
    pub fn set_combobox_value<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String, Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.set_combobox_value = Some(Arc::new(move |value, reason| f(value, reason).boxed()));
        self
    }

    /// Move DOM focus to the combobox input
    pub fn focus_combobox<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.focus_combobox = Some(reason_hook(f));
        self
    }

    /// Render the inline completion of the typed text
    pub fn show_inline_suggestion<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.show_inline_suggestion = Some(reason_hook(f));
        self
    }

    /// Fire the externally visible "change" of the combobox value
    pub fn commit_value<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Reason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.commit_value = Some(reason_hook(f));
        self
    }

    // =========================================================================
    // Invocation (engine side)
    // =========================================================================

    pub(crate) async fn update_state(
        &self,
        patch: StatePatch,
        reason: Reason,
    ) -> Result<ComboboxState> {
        tracing::debug!(%reason, ?patch, "combobox update_state");
        (self.update_state)(patch, reason).await
    }

    pub(crate) async fn check_if_listbox_can_open(&self, reason: Reason) -> Result<bool> {
        let can_open = (self.check_if_listbox_can_open)(reason).await?;
        tracing::trace!(%reason, can_open, "combobox check_if_listbox_can_open");
        Ok(can_open)
    }

    pub(crate) async fn call_prepare_options(&self, reason: Reason) -> Result<bool> {
        let ready = match &self.prepare_options {
            Some(hook) => hook(reason).await?,
            None => true,
        };
        if !ready {
            tracing::debug!(%reason, "options not ready, skipping option logic");
        }
        Ok(ready)
    }

    pub(crate) async fn get_next_option(
        &self,
        current: Option<String>,
        reason: Reason,
    ) -> Result<Option<String>> {
        tracing::trace!(%reason, ?current, "combobox get_next_option");
        (self.get_next_option)(current, reason).await
    }

    pub(crate) async fn get_previous_option(
        &self,
        current: Option<String>,
        reason: Reason,
    ) -> Result<Option<String>> {
        tracing::trace!(%reason, ?current, "combobox get_previous_option");
        (self.get_previous_option)(current, reason).await
    }

    /// `None` when the hook is absent, `Some(answer)` otherwise
    pub(crate) async fn call_find_option_to_activate(
        &self,
        reason: Reason,
    ) -> Result<Option<Option<String>>> {
        match &self.find_option_to_activate {
            Some(hook) => {
                let found = hook(reason).await?;
                tracing::trace!(%reason, ?found, "combobox find_option_to_activate");
                Ok(Some(found))
            }
            None => Ok(None),
        }
    }

    pub(crate) async fn call_set_combobox_value(&self, value: String, reason: Reason) -> Result<()> {
        match &self.set_combobox_value {
            Some(hook) => {
                tracing::trace!(%reason, %value, "combobox set_combobox_value");
                hook(value, reason).await
            }
            None => Ok(()),
        }
    }

    pub(crate) async fn call_focus_combobox(&self, reason: Reason) -> Result<()> {
        match &self.focus_combobox {
            Some(hook) => hook(reason).await,
            None => Ok(()),
        }
    }

    pub(crate) fn has_show_inline_suggestion(&self) -> bool {
        self.show_inline_suggestion.is_some()
    }

    pub(crate) async fn call_show_inline_suggestion(&self, reason: Reason) -> Result<()> {
        match &self.show_inline_suggestion {
            Some(hook) => hook(reason).await,
            None => Ok(()),
        }
    }

    pub(crate) async fn call_commit_value(&self, reason: Reason) -> Result<()> {
        match &self.commit_value {
            Some(hook) => {
                tracing::debug!(%reason, "combobox commit_value");
                hook(reason).await
            }
            None => Ok(()),
        }
    }
}
