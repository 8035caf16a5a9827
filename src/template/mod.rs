//! Named template resources consumed by [`InputDefinition::render_with`].
//!
//! [`InputDefinition::render_with`]: crate::model::InputDefinition::render_with

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{EditorError, Result};

/// Resource name of the parameter block template shipped with the crate.
pub const INPUT_ITEM_TEMPLATE: &str = "InputItem.template";

const INPUT_ITEM_TEXT: &str = include_str!("../../templates/InputItem.template");

/// Source of raw template text, looked up by resource name.
pub trait TemplateLoader {
    fn load_template(&self, name: &str) -> Result<String>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateLoader for BuiltinTemplates {
    fn load_template(&self, name: &str) -> Result<String> {
        match name {
            INPUT_ITEM_TEMPLATE => Ok(INPUT_ITEM_TEXT.to_string()),
            other => Err(EditorError::TemplateNotFound(other.to_string())),
        }
    }
}

/// Reads `<root>/<name>` from disk, optionally falling back to the built-ins
/// when the file does not exist.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateLoader {
    root: PathBuf,
    fallback_to_builtin: bool,
}

impl DirectoryTemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback_to_builtin: false,
        }
    }

    pub fn with_builtin_fallback(mut self) -> Self {
        self.fallback_to_builtin = true;
        self
    }
}

impl TemplateLoader for DirectoryTemplateLoader {
    fn load_template(&self, name: &str) -> Result<String> {
        let relative = Path::new(name);
        if relative.is_absolute() || relative.components().count() != 1 {
            return Err(EditorError::TemplateNotFound(name.to_string()));
        }
        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded template from disk");
                Ok(text)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if self.fallback_to_builtin {
                    BuiltinTemplates.load_template(name)
                } else {
                    Err(EditorError::TemplateNotFound(name.to_string()))
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}
