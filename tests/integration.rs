use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn generates_counter_app() {
    let output_dir = tempdir().expect("Failed to create temp dir");

    let status = Command::new(env!("CARGO_BIN_EXE_counter-e2e"))
        .args(["generate", "--output"])
        .arg(output_dir.path())
        .status()
        .expect("Failed to execute counter-e2e");

    assert!(status.success(), "counter-e2e exited with error");

    let index_path = output_dir.path().join("index.html");
    assert!(index_path.exists(), "index.html was not generated");

    let html = fs::read_to_string(&index_path).expect("Failed to read index.html");

    // Verify the hooks the browser suite relies on
    assert_eq!(html.matches("<h1").count(), 1, "Expected exactly one h1");
    assert!(
        html.contains(r#"<span data-test="count-output">0</span>"#),
        "Counter should start at 0"
    );
    assert!(html.contains(r#"data-test="button-increment""#));
    assert!(html.contains(r#"data-test="button-display""#));
    assert!(html.contains(r#"data-test="display""#));
}

#[test]
fn generate_honours_custom_content() {
    let output_dir = tempdir().expect("Failed to create temp dir");

    let status = Command::new(env!("CARGO_BIN_EXE_counter-e2e"))
        .args(["generate", "--title", "Clicks", "--initial-count", "7", "--message", "Howdy"])
        .arg("--output")
        .arg(output_dir.path())
        .status()
        .expect("Failed to execute counter-e2e");
    assert!(status.success());

    let html = fs::read_to_string(output_dir.path().join("index.html")).unwrap();
    assert!(html.contains("<h1>Clicks</h1>"));
    assert!(html.contains(r#"<span data-test="count-output">7</span>"#));
    assert!(html.contains("Howdy"));
}

#[test]
fn serve_fails_for_missing_directory() {
    let root = tempdir().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_counter-e2e"))
        .args(["serve", "--no-reload", "--port=0", "--dir"])
        .arg(root.path().join("missing"))
        .output()
        .expect("Failed to execute counter-e2e");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No readiness line expected on failure");
}
