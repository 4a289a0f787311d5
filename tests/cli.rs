//! Command-line behaviour of the `errorprone-args` binary

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_errorprone-args"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("HOME")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_render_overrides() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &dir,
        &[
            "render",
            "--disable-all-checks",
            "--enable",
            "BetaApi",
            "--error",
            "NullAway",
            "--option",
            "NullAway:AnnotatedPackages=a.b.c",
            "--arg",
            "-XepPatchChecks:A",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "-XepDisableAllChecks -Xep:BetaApi -Xep:NullAway:ERROR \
         -XepOpt:NullAway:AnnotatedPackages=a.b.c -XepPatchChecks:A"
    );
}

#[test]
fn test_render_reads_project_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".errorprone.toml"),
        "[checks]\nArrayEquals = \"OFF\"\n",
    )
    .unwrap();

    let output = run(&dir, &["render", "--plugin"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-Xplugin:ErrorProne -Xep:ArrayEquals:OFF");
}

#[test]
fn test_render_rejects_colon_in_check_name() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["render", "--enable", "ArrayEquals:OFF"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INVALID_NAME"));
    assert!(stderr.contains("\"ArrayEquals:OFF\""));
}

#[test]
fn test_render_rejects_whitespace_in_option() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["render", "--option", "Foo=Bar Baz"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INVALID_ARGUMENT"));
    assert!(stderr.contains("-XepOpt:"));
}

#[test]
fn test_explain_classifies_tokens() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &dir,
        &["explain", "--", "-XepDisableAllChecks -Xep:A:WARN", "-XepOpt:B=c", "other"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["boolean_flags"], serde_json::json!(["-XepDisableAllChecks"]));
    assert_eq!(json["severities"]["A"], "WARN");
    assert_eq!(json["options"]["B"], "c");
    assert_eq!(json["other"], serde_json::json!(["other"]));
}

#[test]
fn test_verify_reports_bad_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".errorprone.toml"), "disable_everything = true\n").unwrap();

    let output = run(&dir, &["verify"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("VALIDATION_ERROR"));
}
