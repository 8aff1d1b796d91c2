//! # Host-side helpers for aria_core widgets (aria_utils)
//!
//! The engines in `aria_core` only decide *when* things happen; hosts still
//! need the usual plumbing around them:
//!
//! - **debounce**: coalesce bursts of input events before fetching options
//! - **options**: next/previous traversal over an option slice, ready to back
//!   the `get_next_option` / `get_previous_option` hooks
//! - **filter**: wraparound option search and typeahead for listboxes and menus

pub mod debounce;
pub mod filter;
pub mod options;

pub use debounce::{Debouncer, Overlap};
pub use filter::{find_option_with_filter, starts_with_ignore_case, TypeaheadBuffer};
pub use options::{next_option, previous_option};
