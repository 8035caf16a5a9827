use crate::model::{InputDefinition, InputType};

/// Which default-value control is visible and authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveDefault {
    /// Free-text default, shown for [`InputType::String`].
    Text,
    /// Checkbox-style default, shown for [`InputType::Boolean`].
    Toggle,
}

impl ActiveDefault {
    pub fn for_type(input_type: InputType) -> Self {
        match input_type {
            InputType::Boolean => ActiveDefault::Toggle,
            InputType::String => ActiveDefault::Text,
        }
    }
}

/// Live, editable values backing one editor session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    id: String,
    name: String,
    help: String,
    default_text: String,
    default_selected: bool,
    input_type: Option<InputType>,
    error: Option<String>,
}

/// Immutable, trimmed copy of a [`FormState`] taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub id: String,
    pub name: String,
    pub input_type: Option<InputType>,
    pub default_value: String,
    pub help: String,
}

impl FormState {
    /// Blank state with `initial_type` preselected.
    pub fn new(initial_type: Option<InputType>) -> Self {
        let mut state = Self::default();
        if let Some(input_type) = initial_type {
            state.enter_type(input_type);
        }
        state
    }

    /// Copies a seed record into the form. `None` leaves the state untouched.
    pub fn load(&mut self, seed: Option<&InputDefinition>) {
        let Some(seed) = seed else {
            return;
        };
        self.id = seed.id().to_string();
        self.name = seed.name().to_string();
        self.help = seed.help().to_string();

        let input_type = seed.input_type();
        self.enter_type(input_type);
        match input_type {
            InputType::Boolean => {
                self.default_selected = seed.default_value().eq_ignore_ascii_case("true");
            }
            InputType::String => {
                self.default_text = seed.default_value().to_string();
            }
        }
    }

    /// Applies a type-selection event. Re-selecting the current type is not a
    /// transition and leaves the defaults alone. Returns whether the type
    /// changed.
    pub fn select_type(&mut self, input_type: InputType) -> bool {
        if self.input_type == Some(input_type) {
            return false;
        }
        self.enter_type(input_type);
        true
    }

    fn enter_type(&mut self, input_type: InputType) {
        tracing::debug!(input_type = %input_type, "entering type");
        self.input_type = Some(input_type);
        // Both controls return to their zero values on every transition.
        self.default_selected = false;
        self.default_text.clear();
        self.error = None;
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.id = value.into();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_help(&mut self, value: impl Into<String>) {
        self.help = value.into();
    }

    /// Writes the text default. Ignored unless the text control is active.
    pub fn set_default_text(&mut self, value: impl Into<String>) -> bool {
        if self.active_default() != Some(ActiveDefault::Text) {
            return false;
        }
        self.default_text = value.into();
        true
    }

    /// Writes the toggle default. Ignored unless the toggle is active.
    pub fn set_default_selected(&mut self, value: bool) -> bool {
        if self.active_default() != Some(ActiveDefault::Toggle) {
            return false;
        }
        self.default_selected = value;
        true
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn active_default(&self) -> Option<ActiveDefault> {
        self.input_type.map(ActiveDefault::for_type)
    }

    pub fn is_text_default_visible(&self) -> bool {
        self.active_default() == Some(ActiveDefault::Text)
    }

    pub fn is_toggle_default_visible(&self) -> bool {
        self.active_default() == Some(ActiveDefault::Toggle)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn default_selected(&self) -> bool {
        self.default_selected
    }

    pub fn input_type(&self) -> Option<InputType> {
        self.input_type
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Default value as it would be stored in a record right now.
    pub fn effective_default(&self) -> String {
        match self.input_type {
            Some(InputType::Boolean) => self.default_selected.to_string(),
            Some(InputType::String) => self.default_text.trim().to_string(),
            None => String::new(),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            input_type: self.input_type,
            default_value: self.effective_default(),
            help: self.help.trim().to_string(),
        }
    }
}
