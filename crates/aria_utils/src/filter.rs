//! Filtered option lookup and typeahead
//!
//! Listboxes and menus let the user jump to an option by typing its first
//! letters. [`TypeaheadBuffer`] collects the typed characters and forgets them
//! after a short inactivity window; [`find_option_with_filter`] searches the
//! option list from the current option and wraps around.

use std::time::Duration;

use aria_core::Key;
use tokio::time::Instant;

/// Default inactivity window of a [`TypeaheadBuffer`]
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(1);

/// First option matching `predicate`, searching from `starting_point` to the
/// end of the list and then from the beginning.
///
/// With `look_forward` the search starts right after the starting point, so the
/// starting point itself is checked last. Without it the starting point is
/// checked first. An absent or unknown starting point searches the whole list
/// from its first option, in both directions.
pub fn find_option_with_filter<'a, T, F>(
    options: &'a [T],
    starting_point: Option<&str>,
    look_forward: bool,
    mut predicate: F,
) -> Option<&'a T>
where
    T: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    let split = starting_point
        .and_then(|start| options.iter().position(|option| option.as_ref() == start))
        .map(|index| if look_forward { index + 1 } else { index })
        .unwrap_or(0);

    let (wrapped, first) = options.split_at(split);
    first
        .iter()
        .chain(wrapped)
        .find(|option| predicate(option.as_ref()))
}

/// Case-insensitive prefix match
pub fn starts_with_ignore_case(option: &str, prefix: &str) -> bool {
    let mut option = option.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| option.next() == Some(c))
}

/// Characters typed on a listbox or menu, forgotten after inactivity
#[derive(Clone, Debug)]
pub struct TypeaheadBuffer {
    filter: String,
    last_input: Option<Instant>,
    reset_after: Duration,
}

impl Default for TypeaheadBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_AFTER)
    }
}

impl TypeaheadBuffer {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            filter: String::new(),
            last_input: None,
            reset_after,
        }
    }

    /// Record a key press
    ///
    /// Returns `true` when the key was a word character and got appended; the
    /// host should then treat the event as handled. Tab and named keys are
    /// never recorded.
    pub fn push_key(&mut self, key: &Key) -> bool {
        self.push_key_at(key, Instant::now())
    }

    pub fn push_key_at(&mut self, key: &Key, now: Instant) -> bool {
        match key {
            Key::Character(c) if is_word_char(*c) => {
                self.push_char_at(*c, now);
                true
            }
            _ => false,
        }
    }

    /// Append a character, starting over if the previous one is too old
    pub fn push_char_at(&mut self, c: char, now: Instant) {
        if self.is_expired(now) {
            self.filter.clear();
        }
        self.filter.push(c);
        self.last_input = Some(now);
    }

    /// The typed characters still in the inactivity window
    pub fn filter(&self) -> &str {
        self.filter_at(Instant::now())
    }

    pub fn filter_at(&self, now: Instant) -> &str {
        if self.is_expired(now) {
            ""
        } else {
            &self.filter
        }
    }

    pub fn clear(&mut self) {
        self.filter.clear();
        self.last_input = None;
    }

    /// Next option after `current` whose label starts with the typed text,
    /// ignoring case. `None` when nothing matches (the host keeps `current`).
    pub fn find<'a, T: AsRef<str>>(&self, options: &'a [T], current: Option<&str>) -> Option<&'a T> {
        self.find_at(options, current, Instant::now())
    }

    pub fn find_at<'a, T: AsRef<str>>(
        &self,
        options: &'a [T],
        current: Option<&str>,
        now: Instant,
    ) -> Option<&'a T> {
        let filter = self.filter_at(now);
        if filter.is_empty() {
            return None;
        }
        find_option_with_filter(options, current, true, |option| {
            starts_with_ignore_case(option, filter)
        })
    }

    /// Like [`find`](Self::find) with a custom match
    pub fn find_with<'a, T, F>(&self, options: &'a [T], current: Option<&str>, predicate: F) -> Option<&'a T>
    where
        T: AsRef<str>,
        F: FnMut(&str) -> bool,
    {
        if self.filter().is_empty() {
            return None;
        }
        find_option_with_filter(options, current, true, predicate)
    }

    fn is_expired(&self, now: Instant) -> bool {
        match self.last_input {
            Some(last) => now.saturating_duration_since(last) >= self.reset_after,
            None => false,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
