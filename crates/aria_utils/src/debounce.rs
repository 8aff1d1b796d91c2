//! Keyed debounce
//!
//! Coalesces rapid repeated invocations sharing a key. Typical use is wrapping
//! the combobox input handler so a burst of keystrokes results in a single
//! options fetch:
//!
//! ```ignore
//! let overlap = debouncer.debounce("combobox-input", config.input_debounce()).await;
//! if overlap.has_overlap() {
//!     return Ok(()); // a newer keystroke took over
//! }
//! let options = fetch_options(&query).await?;
//! if overlap.has_overlap() {
//!     return Ok(()); // results are stale already
//! }
//! ```

use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use rustc_hash::FxHashMap;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Slot {
    overlapped: AtomicBool,
    superseded: Notify,
}

/// Handle returned once a debounced call resolves
#[derive(Clone, Debug)]
pub struct Overlap {
    slot: Arc<Slot>,
}

impl Overlap {
    /// Whether a newer call with the same key has started, as of now
    pub fn has_overlap(&self) -> bool {
        self.slot.overlapped.load(Ordering::Acquire)
    }
}

/// Debounce state shared by every call site using the same keys
///
/// A key is tracked while its newest call is pending or its [`Overlap`] handle
/// is alive. Keys whose handles were all dropped are pruned on the next call.
#[derive(Debug)]
pub struct Debouncer<K> {
    slots: Mutex<FxHashMap<K, Weak<Slot>>>,
}

impl<K> Default for Debouncer<K> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(FxHashMap::default()),
        }
    }
}

impl<K: Eq + Hash> Debouncer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for `delay`, or less if a newer call with the same key arrives
    ///
    /// A zero delay resolves immediately. The previous call for `key`, if any,
    /// is marked as overlapped and woken up.
    pub async fn debounce(&self, key: K, delay: Duration) -> Overlap {
        let slot = Arc::new(Slot::default());

        let previous = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let previous = slots.insert(key, Arc::downgrade(&slot));
            slots.retain(|_, slot| slot.strong_count() > 0);
            previous.and_then(|previous| previous.upgrade())
        };
        if let Some(previous) = previous {
            previous.overlapped.store(true, Ordering::Release);
            previous.superseded.notify_one();
            tracing::trace!("debounced call superseded");
        }

        if !delay.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = slot.superseded.notified() => {}
            }
        }

        Overlap { slot }
    }

    /// Number of keys with a pending call or a live [`Overlap`] handle
    pub fn len(&self) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.retain(|_, slot| slot.strong_count() > 0);
        slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_call_supersedes_older_one() {
        let debouncer = Debouncer::new();
        let start = Instant::now();

        let first = async {
            let overlap = debouncer.debounce("input", ms(200)).await;
            (overlap, start.elapsed())
        };
        let second = async {
            tokio::time::sleep(ms(50)).await;
            let overlap = debouncer.debounce("input", ms(200)).await;
            (overlap, start.elapsed())
        };
        let ((first, first_at), (second, second_at)) = tokio::join!(first, second);

        assert!(first.has_overlap());
        assert_eq!(first_at, ms(50));
        assert!(!second.has_overlap());
        assert_eq!(second_at, ms(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let debouncer = Debouncer::new();

        let (a, b) = tokio::join!(
            debouncer.debounce("a", ms(100)),
            debouncer.debounce("b", ms(100)),
        );

        assert!(!a.has_overlap());
        assert!(!b.has_overlap());
        assert_eq!(debouncer.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_resolves_immediately() {
        let debouncer = Debouncer::new();
        let start = Instant::now();

        let overlap = debouncer.debounce(1u32, Duration::ZERO).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(!overlap.has_overlap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlap_is_reported_after_resolution() {
        let debouncer = Debouncer::new();

        let first = debouncer.debounce("fetch", ms(10)).await;
        assert!(!first.has_overlap());

        // The host is still awaiting its own work when the next call starts.
        let second = debouncer.debounce("fetch", ms(10)).await;
        assert!(first.has_overlap());
        assert!(!second.has_overlap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_released_with_their_handles() {
        let debouncer = Debouncer::new();

        for id in 0..100u32 {
            let overlap = debouncer.debounce(id, ms(1)).await;
            assert!(!overlap.has_overlap());
        }
        assert!(debouncer.is_empty());

        let kept = debouncer.debounce(7, ms(1)).await;
        let dropped = debouncer.debounce(8, ms(1)).await;
        drop(dropped);
        assert_eq!(debouncer.len(), 1);

        let newer = debouncer.debounce(7, ms(1)).await;
        assert!(kept.has_overlap());
        drop((kept, newer));
        assert!(debouncer.is_empty());
    }
}
