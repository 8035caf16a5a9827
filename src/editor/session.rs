use std::fmt;

use crate::editor::state::FormState;
use crate::editor::validation::{validate, ValidationError};
use crate::errors::{EditorError, Result};
use crate::model::{InputDefinition, InputType};

/// Single-shot completion callback. Receives the submitted record, or `None`
/// when the session was cancelled.
pub type CompletionObserver<'a> = Box<dyn FnOnce(Option<InputDefinition>) + 'a>;

/// What caused a cancellation. All triggers share the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTrigger {
    Button,
    WindowClose,
    Escape,
}

impl fmt::Display for CancelTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CancelTrigger::Button => "cancel button",
            CancelTrigger::WindowClose => "window close",
            CancelTrigger::Escape => "escape",
        };
        f.write_str(label)
    }
}

/// Raw UI events fed into a session by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    Id(String),
    Name(String),
    Help(String),
    DefaultText(String),
    DefaultSelected(bool),
    SelectType(InputType),
    Submit,
    Cancel(CancelTrigger),
}

/// Observable outcome of handling one [`EditorEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Updated,
    TypeChanged(InputType),
    Rejected(ValidationError),
    Submitted(InputDefinition),
    Cancelled,
    /// Event ignored: session closed, hidden control, or unchanged type.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Open,
    Submitted,
    Cancelled,
}

/// One editor lifecycle, from open to a single terminal notification.
pub struct EditorSession<'a> {
    state: FormState,
    observer: Option<CompletionObserver<'a>>,
    status: SessionStatus,
}

impl<'a> EditorSession<'a> {
    /// Opens a session. With a seed the form starts in edit mode and replays
    /// the seed's type transition; otherwise `initial_type` is preselected.
    pub fn open<F>(
        observer: F,
        seed: Option<&InputDefinition>,
        initial_type: Option<InputType>,
    ) -> Self
    where
        F: FnOnce(Option<InputDefinition>) + 'a,
    {
        let mut state = FormState::new(initial_type);
        state.load(seed);
        tracing::debug!(edit_mode = seed.is_some(), "editor session opened");
        Self {
            state,
            observer: Some(Box::new(observer)),
            status: SessionStatus::Open,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    pub fn set_id(&mut self, value: impl Into<String>) -> SessionEvent {
        self.edit(|state| state.set_id(value))
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> SessionEvent {
        self.edit(|state| state.set_name(value))
    }

    pub fn set_help(&mut self, value: impl Into<String>) -> SessionEvent {
        self.edit(|state| state.set_help(value))
    }

    pub fn set_default_text(&mut self, value: impl Into<String>) -> SessionEvent {
        if !self.is_open() || !self.state.set_default_text(value) {
            return SessionEvent::NoOp;
        }
        SessionEvent::Updated
    }

    pub fn set_default_selected(&mut self, value: bool) -> SessionEvent {
        if !self.is_open() || !self.state.set_default_selected(value) {
            return SessionEvent::NoOp;
        }
        SessionEvent::Updated
    }

    pub fn select_type(&mut self, input_type: InputType) -> SessionEvent {
        if !self.is_open() || !self.state.select_type(input_type) {
            return SessionEvent::NoOp;
        }
        SessionEvent::TypeChanged(input_type)
    }

    fn edit(&mut self, apply: impl FnOnce(&mut FormState)) -> SessionEvent {
        if !self.is_open() {
            return SessionEvent::NoOp;
        }
        apply(&mut self.state);
        SessionEvent::Updated
    }

    /// Validates the current values and, on success, delivers the record and
    /// closes the session. Validation failures leave the session open with
    /// the error message set.
    pub fn try_submit(&mut self) -> Result<InputDefinition> {
        if !self.is_open() {
            return Err(EditorError::SessionClosed);
        }
        let snapshot = self.state.snapshot();
        match validate(&snapshot) {
            Ok(definition) => {
                tracing::info!(id = definition.id(), "input definition submitted");
                self.status = SessionStatus::Submitted;
                self.notify(Some(definition.clone()));
                Ok(definition)
            }
            Err(err) => {
                tracing::warn!(field = %err.field, "submit rejected");
                self.state.set_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Ends the session without a record. No-op once the session is closed.
    pub fn cancel(&mut self, trigger: CancelTrigger) -> SessionEvent {
        if !self.is_open() {
            return SessionEvent::NoOp;
        }
        tracing::info!(%trigger, "input definition cancelled");
        self.status = SessionStatus::Cancelled;
        self.notify(None);
        SessionEvent::Cancelled
    }

    pub fn handle(&mut self, event: EditorEvent) -> SessionEvent {
        match event {
            EditorEvent::Id(value) => self.set_id(value),
            EditorEvent::Name(value) => self.set_name(value),
            EditorEvent::Help(value) => self.set_help(value),
            EditorEvent::DefaultText(value) => self.set_default_text(value),
            EditorEvent::DefaultSelected(value) => self.set_default_selected(value),
            EditorEvent::SelectType(input_type) => self.select_type(input_type),
            EditorEvent::Submit => match self.try_submit() {
                Ok(definition) => SessionEvent::Submitted(definition),
                Err(EditorError::Validation(err)) => SessionEvent::Rejected(err),
                Err(_) => SessionEvent::NoOp,
            },
            EditorEvent::Cancel(trigger) => self.cancel(trigger),
        }
    }

    fn notify(&mut self, result: Option<InputDefinition>) {
        if let Some(observer) = self.observer.take() {
            observer(result);
        }
    }
}

impl fmt::Debug for EditorSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("state", &self.state)
            .field("status", &self.status)
            .field("observer_pending", &self.observer.is_some())
            .finish()
    }
}
