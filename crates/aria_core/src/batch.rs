//! Batched state updates
//!
//! One user action usually produces several small state changes (claim focus,
//! open the listbox, reset the active option...). Rather than notifying the
//! host for each of them, handlers collect the patches in a [`StateBatch`] and
//! commit them through a single `update_state` call.
//!
//! ```text
//! StateBatch::new(&state)
//!     ↓ .update(patch)  (zero or more times, later fields win)
//!     ↓ .view()         (base state with the pending patch applied)
//! .commit(update_state) → one outward call, or none if nothing was collected
//! ```

use std::fmt::Debug;
use std::future::Future;

use crate::error::Result;

/// A partial update for some state type
pub trait Patch: Default + Clone + Debug {
    /// The full state this patch applies to
    type State: Clone;

    /// Whether the patch carries no field at all
    fn is_empty(&self) -> bool;

    /// Shallow-merge `later` into `self`; fields present in `later` overwrite
    fn merge(&mut self, later: Self);

    /// Produce a new state with the patch applied
    fn apply(&self, state: &Self::State) -> Self::State;
}

/// Collects patches produced during one logical operation
#[derive(Debug)]
pub struct StateBatch<P: Patch> {
    base: P::State,
    view: P::State,
    pending: P,
    updated: bool,
}

impl<P> StateBatch<P>
where
    P: Patch,
    P::State: Debug,
{
    /// Open a batch on the current state
    pub fn new(state: &P::State) -> Self {
        Self {
            base: state.clone(),
            view: state.clone(),
            pending: P::default(),
            updated: false,
        }
    }

    /// Record a patch. Empty patches are ignored.
    pub fn update(&mut self, patch: P) {
        if patch.is_empty() {
            return;
        }
        self.view = patch.apply(&self.view);
        self.pending.merge(patch);
        self.updated = true;
    }

    /// The state the batch started from
    pub fn base(&self) -> &P::State {
        &self.base
    }

    /// The base state with every pending patch applied
    pub fn view(&self) -> &P::State {
        &self.view
    }

    /// The merged patch collected so far
    pub fn pending(&self) -> &P {
        &self.pending
    }

    /// Whether at least one non-empty patch was recorded
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Hand the merged patch to `update_state` once and return the settled
    /// state. Without any recorded patch the base state is returned and
    /// `update_state` is never called.
    pub async fn commit<F, Fut>(self, update_state: F) -> Result<P::State>
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<P::State>>,
    {
        if !self.updated {
            return Ok(self.base);
        }
        tracing::trace!(patch = ?self.pending, "committing batched state patch");
        update_state(self.pending).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;

    use super::*;
    use crate::state::{Autocomplete, ComboboxState, FocusTarget, StatePatch};

    #[test]
    fn test_no_patch_skips_outward_call() {
        let state = ComboboxState::new(Autocomplete::List);
        let calls = AtomicUsize::new(0);

        let batch = StateBatch::<StatePatch>::new(&state);
        let settled = block_on(batch.commit(|patch| {
            calls.fetch_add(1, Ordering::SeqCst);
            let next = patch.apply(&state);
            async move { Ok(next) }
        }))
        .unwrap();

        assert_eq!(settled, state);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_patch_does_not_mark_updated() {
        let state = ComboboxState::new(Autocomplete::List);
        let mut batch = StateBatch::<StatePatch>::new(&state);
        batch.update(StatePatch::default());
        assert!(!batch.is_updated());
    }

    #[test]
    fn test_patches_merge_into_one_call() {
        let state = ComboboxState::new(Autocomplete::List);
        let calls = AtomicUsize::new(0);

        let mut batch = StateBatch::<StatePatch>::new(&state);
        batch.update(StatePatch::listbox_open(true));
        batch.update(StatePatch::focus(Some(FocusTarget::Listbox)));
        batch.update(StatePatch::focus(Some(FocusTarget::Combobox)));
        assert!(batch.view().is_listbox_open);
        assert!(!batch.base().is_listbox_open);

        let settled = block_on(batch.commit(|patch| {
            calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(patch.is_listbox_open, Some(true));
            assert_eq!(
                patch.element_with_focus,
                Some(Some(FocusTarget::Combobox))
            );
            let next = patch.apply(&state);
            async move { Ok(next) }
        }))
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(settled.is_listbox_open);
        assert_eq!(settled.element_with_focus, Some(FocusTarget::Combobox));
    }
}
