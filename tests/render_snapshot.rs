use template_input_editor::template::{BuiltinTemplates, INPUT_ITEM_TEMPLATE};
use template_input_editor::{InputDefinition, InputType};

#[test]
fn builtin_template_renders_boolean_definition() {
    let definition = InputDefinition::new(
        "enabled",
        "Enabled",
        InputType::Boolean,
        "true",
        "Turns the feature on",
    );
    let rendered = definition
        .render_with(&BuiltinTemplates, INPUT_ITEM_TEMPLATE)
        .unwrap();
    insta::assert_snapshot!("builtin_boolean_definition", rendered);
}

#[test]
fn builtin_template_renders_string_definition() {
    let definition = InputDefinition::new("label", "Label", InputType::String, "", "");
    let rendered = definition
        .render_with(&BuiltinTemplates, INPUT_ITEM_TEMPLATE)
        .unwrap();
    insta::assert_snapshot!("builtin_string_definition", rendered);
}
