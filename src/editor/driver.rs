use std::collections::VecDeque;

use crate::editor::session::{CancelTrigger, EditorEvent, EditorSession, SessionEvent};
use crate::editor::state::FormState;
use crate::errors::Result;
use crate::model::{InputDefinition, InputType};

/// Event source driving an editor session. Terminal prompts, scripted
/// replays, or any other presentation layer plug in here.
pub trait EditorInteraction {
    /// Next UI event, or `None` once the source is exhausted.
    fn next_event(&mut self, state: &FormState) -> Result<Option<EditorEvent>>;

    /// Called after every handled event so the presentation can refresh
    /// visibility and messages.
    fn render(&mut self, _state: &FormState, _outcome: &SessionEvent) {}
}

/// Session-level knobs supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Type preselected in create mode.
    pub initial_type: Option<InputType>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_type: Some(InputType::Boolean),
        }
    }
}

/// Runs one editor session to completion.
///
/// The observer is called exactly once before this returns `Ok`: with the
/// submitted record, or with `None` on cancellation. An exhausted event source
/// counts as closing the window. If the interaction fails, the session is
/// cancelled first and the error is returned.
pub fn open_editor<'a, I, F>(
    interaction: &mut I,
    observer: F,
    seed: Option<&InputDefinition>,
    options: &EditorOptions,
) -> Result<()>
where
    I: EditorInteraction + ?Sized,
    F: FnOnce(Option<InputDefinition>) + 'a,
{
    let mut session = EditorSession::open(observer, seed, options.initial_type);

    while session.is_open() {
        match interaction.next_event(session.state()) {
            Ok(Some(event)) => {
                let outcome = session.handle(event);
                interaction.render(session.state(), &outcome);
            }
            Ok(None) => {
                let outcome = session.cancel(CancelTrigger::WindowClose);
                interaction.render(session.state(), &outcome);
            }
            Err(err) => {
                session.cancel(CancelTrigger::WindowClose);
                return Err(err);
            }
        }
    }

    Ok(())
}

/// Replays a fixed queue of events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    events: VecDeque<EditorEvent>,
    outcomes: Vec<SessionEvent>,
}

impl ScriptedInteraction {
    pub fn new(events: impl IntoIterator<Item = EditorEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            outcomes: Vec::new(),
        }
    }

    /// Outcomes observed so far, in order.
    pub fn outcomes(&self) -> &[SessionEvent] {
        &self.outcomes
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EditorInteraction for ScriptedInteraction {
    fn next_event(&mut self, _state: &FormState) -> Result<Option<EditorEvent>> {
        Ok(self.events.pop_front())
    }

    fn render(&mut self, _state: &FormState, outcome: &SessionEvent) {
        self.outcomes.push(outcome.clone());
    }
}
