//! Combobox Session Demo
//!
//! Drives a `list` combobox over US states without any UI: typing, arrow
//! navigation and Enter, printing the ARIA attributes after each step.
//!
//! Run with: cargo run -p aria_utils --example combobox_session
//! More detail: RUST_LOG=aria_core=trace cargo run -p aria_utils --example combobox_session

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aria_core::prelude::*;
use aria_core::Patch;
use aria_utils::{find_option_with_filter, next_option, previous_option, starts_with_ignore_case, Debouncer};

const US_STATES: [&str; 10] = [
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
];

/// Host-side model: widget state plus the text of the input
struct Model {
    state: Mutex<ComboboxState>,
    text: Mutex<String>,
}

impl Model {
    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn state(&self) -> ComboboxState {
        self.state.lock().unwrap().clone()
    }

    /// Options shown in the listbox for the current text
    fn visible_options(&self) -> Vec<&'static str> {
        let text = self.text();
        US_STATES
            .iter()
            .copied()
            .filter(|option| starts_with_ignore_case(option, &text))
            .collect()
    }
}

fn hooks(model: &Arc<Model>) -> ComboboxHooks {
    let update = {
        let model = model.clone();
        move |patch: StatePatch, reason: Reason| {
            let mut state = model.state.lock().unwrap();
            *state = patch.apply(&state);
            tracing::info!(%reason, ?patch, "state updated");
            let settled = state.clone();
            async move { Ok(settled) }
        }
    };
    let can_open = {
        let model = model.clone();
        move |_reason: Reason| {
            let has_options = !model.visible_options().is_empty();
            async move { Ok(has_options) }
        }
    };
    let next = {
        let model = model.clone();
        move |current: Option<String>, _reason: Reason| {
            let options = model.visible_options();
            let next = next_option(&options[..], current.as_deref(), true).map(|o| o.to_string());
            async move { Ok(next) }
        }
    };
    let previous = {
        let model = model.clone();
        move |current: Option<String>, _reason: Reason| {
            let options = model.visible_options();
            let previous = previous_option(&options[..], current.as_deref(), true).map(|o| o.to_string());
            async move { Ok(previous) }
        }
    };

    ComboboxHooks::new(update, can_open, next, previous)
        .find_option_to_activate({
            let model = model.clone();
            move |_reason| {
                let text = model.text();
                let found = find_option_with_filter(&US_STATES, None, true, |option| {
                    !text.is_empty() && starts_with_ignore_case(option, &text)
                })
                .map(|o| o.to_string());
                async move { Ok(found) }
            }
        })
        .set_combobox_value({
            let model = model.clone();
            move |value, _reason| {
                *model.text.lock().unwrap() = value;
                async { Ok(()) }
            }
        })
        .commit_value({
            let model = model.clone();
            move |reason| {
                tracing::info!(%reason, value = %model.text(), "value committed");
                async { Ok(()) }
            }
        })
}

fn print_attributes(model: &Model, step: &str) {
    let state = model.state();
    let id = state
        .active_option
        .as_deref()
        .map(|option| format!("option-{}", option.to_lowercase().replace(' ', "-")));
    let attrs = a11y_attributes(&state, id.as_deref());
    println!(
        "{step:<12} text={:<16?} open={:<5} active={:<16?} {:?}",
        model.text(),
        state.is_listbox_open,
        state.active_option,
        attrs.combobox.attributes(),
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ComboboxConfig::from_toml_str(
        r#"
        autocomplete = "list"
        input_debounce_ms = 50
        "#,
    )?;

    let model = Arc::new(Model {
        state: Mutex::new(config.initial_state()),
        text: Mutex::default(),
    });
    let hooks = hooks(&model);
    let debouncer = Debouncer::new();

    print_attributes(&model, "initial");

    // A burst of keystrokes: only the last one reaches the engine
    let keystroke = |c: char, at_ms: u64| {
        let (model, hooks, debouncer, config) = (&model, &hooks, &debouncer, &config);
        async move {
            tokio::time::sleep(Duration::from_millis(at_ms)).await;
            model.text.lock().unwrap().push(c);
            if debouncer.debounce("input", config.input_debounce()).await.has_overlap() {
                tracing::info!(%c, "keystroke coalesced");
                return Ok::<(), AriaError>(());
            }
            combobox::handle_combobox_input(
                &model.state(),
                InputKind::from_input_type("insertText"),
                hooks,
            )
            .await?;
            Ok(())
        }
    };
    let (n, e, w) = tokio::join!(keystroke('n', 0), keystroke('e', 10), keystroke('w', 20));
    n?;
    e?;
    w?;
    print_attributes(&model, "typed");

    for key in ["ArrowDown", "ArrowDown", "ArrowUp", "Enter"] {
        let event = KeyEvent::new(Key::from_dom_key(key));
        combobox::handle_combobox_key_down(&model.state(), &event, &model.text(), &hooks).await?;
        print_attributes(&model, key);
    }

    Ok(())
}
