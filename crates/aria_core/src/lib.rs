//! # Headless ARIA widget behavior (aria_core)
//!
//! Framework-agnostic interaction logic for accessible widgets following the
//! WAI-ARIA authoring practices. Nothing here renders or touches a DOM: the
//! engines map user events to state transitions and delegate every side effect
//! to async hooks supplied by the host.
//!
//! - **Combobox**: event handlers for input, keyboard, focus, clicks and
//!   pointer events, with batched state updates and an `autocomplete` mode
//!   (`none`, `list`, `both`, `inline`)
//! - **Dialog**: open/close state of a dialog or modal
//! - **Accessibility**: the ARIA attribute values for a given state
//!
//! ## Example
//!
//! ```ignore
//! use aria_core::prelude::*;
//!
//! let config = ComboboxConfig::from_toml_str(r#"autocomplete = "list""#)?;
//! let mut state = config.initial_state();
//!
//! let handled = combobox::handle_combobox_input(
//!     &state,
//!     InputKind::from_input_type("insertText"),
//!     &hooks,
//! )
//! .await?;
//! state = handled.state;
//!
//! let attrs = a11y_attributes(&state, Some("option-3"));
//! ```

pub mod a11y;
pub mod batch;
pub mod behavior;
pub mod combobox;
pub mod config;
pub mod dialog;
pub mod environment;
pub mod error;
pub mod events;
pub mod hooks;
pub mod reason;
pub mod state;

pub use a11y::{a11y_attributes, AriaBool, ComboboxA11y};
pub use batch::{Patch, StateBatch};
pub use behavior::{behavior, Behavior};
pub use config::ComboboxConfig;
pub use environment::Environment;
pub use error::{AriaError, Result};
pub use events::{Disposition, Handled, InputKind, Key, KeyEvent};
pub use hooks::{ComboboxHooks, HookFuture};
pub use reason::Reason;
pub use state::{Autocomplete, ComboboxState, FocusTarget, StatePatch};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::a11y::a11y_attributes;
    pub use crate::behavior::behavior;
    pub use crate::combobox;
    pub use crate::config::ComboboxConfig;
    pub use crate::environment::Environment;
    pub use crate::error::{AriaError, Result};
    pub use crate::events::{Disposition, Handled, InputKind, Key, KeyEvent};
    pub use crate::hooks::ComboboxHooks;
    pub use crate::reason::Reason;
    pub use crate::state::{Autocomplete, ComboboxState, FocusTarget, StatePatch};
}
