//! Form controller for a single input definition.
//!
//! [`FormState`] holds the live values and the type-driven visibility rules,
//! [`EditorSession`] wraps it with submit/cancel semantics and single-shot
//! result delivery, and [`open_editor`] drives a session from any
//! [`EditorInteraction`].

pub mod driver;
pub mod session;
pub mod state;
pub mod validation;

pub use driver::{open_editor, EditorInteraction, EditorOptions, ScriptedInteraction};
pub use session::{
    CancelTrigger, CompletionObserver, EditorEvent, EditorSession, SessionEvent, SessionStatus,
};
pub use state::{ActiveDefault, FormSnapshot, FormState};
pub use validation::{validate, RequiredField, ValidationError};
