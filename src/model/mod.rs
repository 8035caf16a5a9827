//! Record model for template input definitions.

pub mod definition;
pub mod input_type;

pub use definition::{
    InputDefinition, RawInputDefinition, DEFAULT_MARKER, HELP_MARKER, ID_MARKER, NAME_MARKER,
    TYPE_MARKER,
};
pub use input_type::InputType;
