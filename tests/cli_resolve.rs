mod common;
use common::cli::{DotrcWorkspace, run_dotrc, run_dotrc_with_stdin};
use serde_json::json;

#[test]
fn test_path_defaults_to_local() {
    let workspace = DotrcWorkspace::new();
    let output = run_dotrc(&workspace, ["path", "chanjo.py"], "path");
    assert!(output.status.success(), "path failed: {}", output.stderr);
    assert_eq!(
        output.stdout.trim(),
        workspace.root.join(".chanjorc").display().to_string()
    );
}

#[test]
fn test_path_json_reports_existence() {
    let workspace = DotrcWorkspace::new();
    workspace.write_home(".chanjorc", "x: 1\n");

    let output = run_dotrc(
        &workspace,
        ["--json", "path", "chanjo", "--scope", "global,local"],
        "path_json",
    );
    assert!(output.status.success(), "path failed: {}", output.stderr);
    let entries = output.json();
    assert_eq!(entries[0]["scope"], "global");
    assert_eq!(entries[0]["exists"], true);
    assert_eq!(
        entries[0]["path"],
        workspace.home.join(".chanjorc").display().to_string()
    );
    assert_eq!(entries[1]["scope"], "local");
    assert_eq!(entries[1]["exists"], false);
}

#[test]
fn test_path_invalid_scope() {
    let workspace = DotrcWorkspace::new();
    let output = run_dotrc(
        &workspace,
        ["path", "chanjo", "--scope", "universal"],
        "path_invalid",
    );
    assert!(!output.status.success());
    assert!(output.stderr.contains("'universal' must be either"));
}

#[test]
fn test_resolve_without_config_files_uses_defaults() {
    let workspace = DotrcWorkspace::new();
    workspace.write("args.json", r#"{"--x": null}"#);
    workspace.write("defaults.json", r#"{"x": 1}"#);

    let output = run_dotrc(
        &workspace,
        [
            "resolve",
            "prog",
            "--args",
            "args.json",
            "--defaults",
            "defaults.json",
        ],
        "resolve_defaults",
    );
    assert!(output.status.success(), "resolve failed: {}", output.stderr);
    assert_eq!(output.json(), json!({"--x": 1}));
}

#[test]
fn test_resolve_precedence() {
    let workspace = DotrcWorkspace::new();
    workspace.write_home(".progrc", "x: 1\nspeed: 5\nname: global\n");
    workspace.write(".progrc", r#"{"x": 2, "speed": 7}"#);
    workspace.write("defaults.yaml", "x: 0\nname: builtin\nverbose: false\n");

    let args = r#"{
        "--x": null,
        "--speed": "9",
        "<name>": null,
        "--verbose": null,
        "--force": "YES",
        "--missing": null,
        "install": true
    }"#;
    let output = run_dotrc_with_stdin(
        &workspace,
        ["resolve", "prog", "--args", "-", "--defaults", "defaults.yaml"],
        args,
        "resolve_precedence",
    );
    assert!(output.status.success(), "resolve failed: {}", output.stderr);
    assert_eq!(
        output.json(),
        json!({
            "--x": 2,
            "--speed": "9",
            "<name>": "global",
            "--verbose": false,
            "--force": true,
            "--missing": null,
            "install": true
        })
    );
}

#[test]
fn test_resolve_scope_order() {
    let workspace = DotrcWorkspace::new();
    workspace.write_home(".progrc", "x: home\n");
    workspace.write(".progrc", "x: local\n");
    workspace.write("args.json", r#"{"--x": null}"#);

    // local first, global last: global wins
    let output = run_dotrc(
        &workspace,
        ["resolve", "prog", "--args", "args.json", "--scope", "local", "--scope", "global"],
        "resolve_reversed",
    );
    assert!(output.status.success(), "resolve failed: {}", output.stderr);
    assert_eq!(output.json(), json!({"--x": "home"}));
}

#[test]
fn test_resolve_malformed_config_fails() {
    let workspace = DotrcWorkspace::new();
    workspace.write(".progrc", "- just\n- a list\n");

    let output = run_dotrc(&workspace, ["--json", "resolve", "prog"], "resolve_bad");
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_str(output.stderr.trim()).unwrap();
    assert_eq!(err["error"]["kind"], "config_parse");
}

#[test]
fn test_resolve_malformed_key_fails() {
    let workspace = DotrcWorkspace::new();
    workspace.write("args.json", r#"{"-v": null}"#);

    let output = run_dotrc(
        &workspace,
        ["--json", "resolve", "prog", "--args", "args.json"],
        "resolve_malformed_key",
    );
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_str(output.stderr.trim()).unwrap();
    assert_eq!(err["error"]["kind"], "malformed_key");
}

#[test]
fn test_show_lists_layers() {
    let workspace = DotrcWorkspace::new();
    workspace.write(".progrc", "speed: 30\n");

    let output = run_dotrc(&workspace, ["--json", "show", "prog"], "show");
    assert!(output.status.success(), "show failed: {}", output.stderr);
    let shown = output.json();
    assert_eq!(shown["layers"][0]["scope"], "global");
    assert_eq!(shown["layers"][0]["found"], false);
    assert_eq!(shown["layers"][1]["scope"], "local");
    assert_eq!(shown["layers"][1]["found"], true);
    assert_eq!(shown["defaults"], json!({"speed": 30}));
}
