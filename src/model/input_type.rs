use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::EditorError;

/// Value kinds a template parameter can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Boolean,
    String,
}

impl InputType {
    pub const ALL: [InputType; 2] = [InputType::Boolean, InputType::String];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Boolean => "boolean",
            InputType::String => "string",
        }
    }

    fn closest(input: &str) -> Option<&'static str> {
        Self::ALL
            .iter()
            .map(|kind| (levenshtein(kind.as_str(), input), kind.as_str()))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= 3)
            .map(|(_, name)| name)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| EditorError::UnknownInputType {
                value: s.to_string(),
                suggestion: Self::closest(&normalized),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_case_insensitively() {
        assert_eq!("Boolean".parse::<InputType>().unwrap(), InputType::Boolean);
        assert_eq!(" STRING ".parse::<InputType>().unwrap(), InputType::String);
    }

    #[test]
    fn unknown_type_suggests_nearest_variant() {
        match "strin".parse::<InputType>() {
            Err(EditorError::UnknownInputType { value, suggestion }) => {
                assert_eq!(value, "strin");
                assert_eq!(suggestion, Some("string"));
            }
            other => panic!("Unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn distant_type_has_no_suggestion() {
        match "enumeration".parse::<InputType>() {
            Err(EditorError::UnknownInputType { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("Unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&InputType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
        assert!(serde_json::from_str::<InputType>("\"float\"").is_err());
    }
}
