#![doc(test(attr(deny(warnings))))]

//! Template Input Editor collects, validates, and renders the input
//! definitions (parameter blocks) consumed by project-template engines.

pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod model;
pub mod template;
pub mod utils;

pub use editor::{open_editor, EditorOptions, EditorSession};
pub use errors::{EditorError, Result};
pub use model::{InputDefinition, InputType};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Template input editor tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
