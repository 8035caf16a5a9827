//! Scripted event queue used to drive the terminal editor without a TTY.
//!
//! When `TEMPLATE_INPUT_EDITOR_TEST_EVENTS` is set, the terminal interaction
//! pops events from it instead of prompting. Tokens are separated by `|`:
//!
//! - `id=…`, `name=…`, `help=…`, `default=…` set the matching field
//! - `toggle=true|false` sets the boolean default
//! - `type=boolean|string` selects a type
//! - `<SUBMIT>`, `<CANCEL>`, `<ESC>`, `<CLOSE>` submit or cancel

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

use crate::editor::{CancelTrigger, EditorEvent};
use crate::model::InputType;

pub const TEST_EVENTS_ENV: &str = "TEMPLATE_INPUT_EDITOR_TEST_EVENTS";

struct EventQueue {
    enabled: bool,
    events: VecDeque<EditorEvent>,
}

impl EventQueue {
    fn from_env() -> Self {
        if let Ok(raw) = env::var(TEST_EVENTS_ENV) {
            Self {
                enabled: true,
                events: parse_event_sequence(&raw),
            }
        } else {
            Self::new()
        }
    }

    fn new() -> Self {
        Self {
            enabled: false,
            events: VecDeque::new(),
        }
    }
}

static EDITOR_EVENTS: Lazy<Mutex<EventQueue>> = Lazy::new(|| Mutex::new(EventQueue::from_env()));

fn with_queue<T>(apply: impl FnOnce(&mut EventQueue) -> T) -> T {
    let mut guard = match EDITOR_EVENTS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    apply(&mut guard)
}

pub fn is_enabled() -> bool {
    with_queue(|queue| queue.enabled)
}

/// Pops the next scripted event. `None` when scripting is disabled; `Some(None)`
/// once an enabled queue runs dry.
pub fn next_event() -> Option<Option<EditorEvent>> {
    with_queue(|queue| {
        if !queue.enabled {
            return None;
        }
        Some(queue.events.pop_front())
    })
}

pub fn install_events(events: Vec<EditorEvent>) {
    with_queue(|queue| {
        queue.enabled = true;
        queue.events = events.into();
    });
}

pub fn reset_events() {
    with_queue(|queue| {
        queue.enabled = false;
        queue.events.clear();
    });
}

fn parse_event(token: &str) -> Option<EditorEvent> {
    match token.to_ascii_uppercase().as_str() {
        "<SUBMIT>" | "<OK>" => return Some(EditorEvent::Submit),
        "<CANCEL>" => return Some(EditorEvent::Cancel(CancelTrigger::Button)),
        "<ESC>" | "<ESCAPE>" => return Some(EditorEvent::Cancel(CancelTrigger::Escape)),
        "<CLOSE>" => return Some(EditorEvent::Cancel(CancelTrigger::WindowClose)),
        _ => {}
    }

    let (key, value) = token.split_once('=')?;
    match key.trim().to_ascii_lowercase().as_str() {
        "id" => Some(EditorEvent::Id(value.to_string())),
        "name" => Some(EditorEvent::Name(value.to_string())),
        "help" => Some(EditorEvent::Help(value.to_string())),
        "default" => Some(EditorEvent::DefaultText(value.to_string())),
        "toggle" => Some(EditorEvent::DefaultSelected(
            value.trim().eq_ignore_ascii_case("true"),
        )),
        "type" => match value.parse::<InputType>() {
            Ok(input_type) => Some(EditorEvent::SelectType(input_type)),
            Err(err) => {
                tracing::warn!(%err, "skipping scripted type event");
                None
            }
        },
        _ => None,
    }
}

fn parse_event_sequence(raw: &str) -> VecDeque<EditorEvent> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim_start();
            if trimmed.is_empty() {
                None
            } else {
                parse_event(trimmed)
            }
        })
        .collect()
}
