use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{EditorError, Result};
use crate::model::InputType;
use crate::template::TemplateLoader;

/// Placeholder markers substituted by [`InputDefinition::render`], in
/// substitution order.
pub const ID_MARKER: &str = "`id`";
pub const NAME_MARKER: &str = "`name`";
pub const TYPE_MARKER: &str = "`type`";
pub const DEFAULT_MARKER: &str = "`default`";
pub const HELP_MARKER: &str = "`help`";

/// A single configurable template parameter.
///
/// Instances are immutable; the editor produces a fresh value on every
/// successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInputDefinition", rename_all = "camelCase")]
pub struct InputDefinition {
    id: String,
    name: String,
    #[serde(rename = "type")]
    input_type: InputType,
    default_value: String,
    help: String,
}

/// Untyped wire shape of a record, as supplied by a host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub input_type: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub help: String,
}

impl InputDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        input_type: InputType,
        default_value: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input_type,
            default_value: default_value.into(),
            help: help.into(),
        }
    }

    /// Parses a host-supplied JSON record. Unknown `type` values surface as
    /// [`EditorError::UnknownInputType`] rather than a generic decode error.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawInputDefinition = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Substitutes every occurrence of the five markers with the field values.
    /// Values are inserted verbatim.
    pub fn render(&self, template: &str) -> String {
        template
            .replace(ID_MARKER, &self.id)
            .replace(NAME_MARKER, &self.name)
            .replace(TYPE_MARKER, self.input_type.as_str())
            .replace(DEFAULT_MARKER, &self.default_value)
            .replace(HELP_MARKER, &self.help)
    }

    /// Loads `template_name` through `loader` and renders it. Loader failures
    /// are returned as-is.
    pub fn render_with<L>(&self, loader: &L, template_name: &str) -> Result<String>
    where
        L: TemplateLoader + ?Sized,
    {
        let template = loader.load_template(template_name)?;
        Ok(self.render(&template))
    }
}

impl TryFrom<RawInputDefinition> for InputDefinition {
    type Error = EditorError;

    fn try_from(raw: RawInputDefinition) -> Result<Self> {
        let input_type = raw.input_type.parse::<InputType>()?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            input_type,
            default_value: raw.default_value,
            help: raw.help,
        })
    }
}

impl fmt::Display for InputDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InputDefinition{{id='{}', name='{}', type='{}', defaultValue='{}', help='{}'}}",
            self.id, self.name, self.input_type, self.default_value, self.help
        )
    }
}
