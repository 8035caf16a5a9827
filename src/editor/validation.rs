use std::fmt;

use thiserror::Error;

use crate::editor::state::FormSnapshot;
use crate::model::InputDefinition;

/// Fields that must be non-empty before a record can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Id,
    Name,
    Type,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::Name => "name",
            RequiredField::Type => "type",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submit-time failure naming the first empty required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is empty.")]
pub struct ValidationError {
    pub field: RequiredField,
}

impl ValidationError {
    pub fn new(field: RequiredField) -> Self {
        Self { field }
    }
}

/// Checks `id`, `name`, then `type`, stopping at the first empty one, and
/// builds the record from the snapshot on success.
pub fn validate(snapshot: &FormSnapshot) -> Result<InputDefinition, ValidationError> {
    if snapshot.id.is_empty() {
        return Err(ValidationError::new(RequiredField::Id));
    }
    if snapshot.name.is_empty() {
        return Err(ValidationError::new(RequiredField::Name));
    }
    let Some(input_type) = snapshot.input_type else {
        return Err(ValidationError::new(RequiredField::Type));
    };
    Ok(InputDefinition::new(
        snapshot.id.clone(),
        snapshot.name.clone(),
        input_type,
        snapshot.default_value.clone(),
        snapshot.help.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputType;

    fn snapshot(id: &str, name: &str, input_type: Option<InputType>) -> FormSnapshot {
        FormSnapshot {
            id: id.into(),
            name: name.into(),
            input_type,
            default_value: String::new(),
            help: String::new(),
        }
    }

    #[test]
    fn reports_fields_in_order() {
        let err = validate(&snapshot("", "", None)).unwrap_err();
        assert_eq!(err.field, RequiredField::Id);
        let err = validate(&snapshot("id", "", None)).unwrap_err();
        assert_eq!(err.field, RequiredField::Name);
        let err = validate(&snapshot("id", "Name", None)).unwrap_err();
        assert_eq!(err.field, RequiredField::Type);
    }

    #[test]
    fn messages_match_field_names() {
        assert_eq!(
            ValidationError::new(RequiredField::Id).to_string(),
            "id is empty."
        );
        assert_eq!(
            ValidationError::new(RequiredField::Type).to_string(),
            "type is empty."
        );
    }

    #[test]
    fn builds_record_from_snapshot() {
        let definition = validate(&snapshot("id", "Name", Some(InputType::String))).unwrap();
        assert_eq!(definition.id(), "id");
        assert_eq!(definition.input_type(), InputType::String);
        assert_eq!(definition.default_value(), "");
    }
}
