
use assert_cmd::Command;
use editor_support::EditorTestHarness;
use predicates::str::contains;

#[test]
fn help_flag_prints_usage() {
    let mut cmd = Command::cargo_bin("input_editor_cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage: input_editor_cli"));
}

#[test]
fn boolean_definition_renders_builtin_template() {
    let harness = EditorTestHarness::new();
    let output = harness.run_ok(
        &[
            "id=isKotlin",
            "name=Use Kotlin",
            "toggle=true",
            "help=Generate Kotlin sources",
            "<SUBMIT>",
        ],
        &[],
    );
    assert!(output.stdout.contains("id=\"isKotlin\""), "{}", output.stdout);
    assert!(output.stdout.contains("type=\"boolean\""), "{}", output.stdout);
    assert!(output.stdout.contains("default=\"true\""), "{}", output.stdout);
    assert!(
        output.stdout.contains("help=\"Generate Kotlin sources\""),
        "{}",
        output.stdout
    );
}

#[test]
fn validation_error_is_reported_and_session_stays_open() {
    let harness = EditorTestHarness::new();
    let output = harness.run_ok(
        &[
            "name=Package",
            "<SUBMIT>",
            "id=  packageName  ",
            "type=string",
            "default= com.example ",
            "<SUBMIT>",
        ],
        &[],
    );
    assert!(output.stderr.contains("ERROR: id is empty."), "{}", output.stderr);
    assert!(output.stdout.contains("id=\"packageName\""), "{}", output.stdout);
    assert!(output.stdout.contains("default=\"com.example\""), "{}", output.stdout);
}

#[test]
fn every_cancel_trigger_ends_without_output() {
    for trigger in ["<CANCEL>", "<ESC>", "<CLOSE>"] {
        let harness = EditorTestHarness::new();
        let output = harness.run_ok(&["id=unused", trigger, "<SUBMIT>"], &[]);
        assert!(
            output.stderr.contains("Input definition cancelled."),
            "{trigger}: {}",
            output.stderr
        );
        assert!(!output.stdout.contains("<parameter"), "{trigger}: {}", output.stdout);
    }
}

#[test]
fn exhausted_events_count_as_window_close() {
    let harness = EditorTestHarness::new();
    let output = harness.run_ok(&["id=partial"], &[]);
    assert!(output.stderr.contains("Input definition cancelled."), "{}", output.stderr);
}

#[test]
fn seed_is_edited_and_printed_as_json() {
    let harness = EditorTestHarness::new();
    let seed = harness.write_file(
        "seed.json",
        r#"{"id":"minSdk","name":"Minimum SDK","type":"string","defaultValue":"21","help":"API level"}"#,
    );
    let output = harness.run_ok(
        &["name=Min SDK", "<SUBMIT>"],
        &["--seed", seed.to_str().unwrap(), "--format", "json"],
    );
    assert!(output.stdout.contains("\"id\": \"minSdk\""), "{}", output.stdout);
    assert!(output.stdout.contains("\"name\": \"Min SDK\""), "{}", output.stdout);
    assert!(output.stdout.contains("\"defaultValue\": \"21\""), "{}", output.stdout);
}

#[test]
fn seed_with_unknown_type_fails() {
    let harness = EditorTestHarness::new();
    let seed = harness.write_file(
        "seed.json",
        r#"{"id":"a","name":"A","type":"strng","defaultValue":"","help":""}"#,
    );
    let output = harness.run(&["<SUBMIT>"], &["--seed", seed.to_str().unwrap()]);
    assert!(!output.success);
    assert!(
        output.stderr.contains("Unknown input type `strng` (did you mean `string`?)"),
        "{}",
        output.stderr
    );
}

#[test]
fn custom_template_directory_is_used() {
    let harness = EditorTestHarness::new();
    harness.write_file("custom/Line.template", "`name` (`type`) = `default`\n");
    let dir = harness.home().join("custom");
    let output = harness.run_ok(
        &["id=flag", "name=Flag", "<SUBMIT>"],
        &["--template-dir", dir.to_str().unwrap(), "--template", "Line.template"],
    );
    assert!(output.stdout.contains("Flag (boolean) = false"), "{}", output.stdout);
}

#[test]
fn missing_template_fails_after_submit() {
    let harness = EditorTestHarness::new();
    let output = harness.run(
        &["id=flag", "name=Flag", "<SUBMIT>"],
        &["--template", "Nope.template"],
    );
    assert!(!output.success);
    assert!(
        output.stderr.contains("Template not found: Nope.template"),
        "{}",
        output.stderr
    );
}

#[test]
fn saved_config_changes_initial_type() {
    let harness = EditorTestHarness::new();
    harness.run_ok(&["<CANCEL>"], &["--type", "string", "--save-config"]);
    let output = harness.run_ok(
        &["id=title", "name=Title", "default=Hello", "<SUBMIT>"],
        &[],
    );
    assert!(output.stdout.contains("type=\"string\""), "{}", output.stdout);
    assert!(output.stdout.contains("default=\"Hello\""), "{}", output.stdout);
}

#[test]
fn status_lines_stay_off_stdout() {
    let harness = EditorTestHarness::new();
    let output = harness.run_ok(
        &["id=flag", "name=Flag", "<SUBMIT>"],
        &["--format", "json"],
    );
    assert!(
        output.stderr.contains("SUCCESS: Input definition `flag` accepted."),
        "{}",
        output.stderr
    );
    assert!(!output.stdout.contains("SUCCESS"), "{}", output.stdout);
    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["id"], "flag");
    assert_eq!(value["defaultValue"], "false");
}

#[test]
fn rendered_template_is_the_only_stdout() {
    let harness = EditorTestHarness::new();
    let output = harness.run_ok(&["id=flag", "name=Flag", "<SUBMIT>"], &[]);
    assert!(output.stdout.trim_start().starts_with("<parameter"), "{}", output.stdout);
    assert!(output.stdout.trim_end().ends_with("/>"), "{}", output.stdout);
}
