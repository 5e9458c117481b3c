use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_file(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(&path, contents).expect("write file");
}

fn sop_doc() -> Command {
    Command::cargo_bin("sop-doc").expect("binary")
}

#[test]
fn missing_arguments_print_usage_and_exit_one() {
    sop_doc()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("usage: sop-doc"));
}

#[test]
fn optimizes_a_single_file() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "test.md", "# 测试文档\n\n这是一份测试文档。");
    let output = temp.path().join("optimized.md");

    sop_doc()
        .arg(temp.path().join("test.md"))
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains("# Optimized Document"));
    assert!(written.contains("Generated: "));
    assert!(written.contains("测试文档"));

    let report = fs::read_to_string(temp.path().join("optimized_report.html")).expect("report");
    assert!(report.contains("Quality score: 85"));
}

#[test]
fn nonexistent_input_exits_one() {
    let temp = TempDir::new().expect("tempdir");

    sop_doc()
        .arg("/nonexistent/input.md")
        .arg(temp.path().join("out.md"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("input path does not exist"));
}

#[test]
fn directory_run_mirrors_structure() {
    let temp = TempDir::new().expect("tempdir");
    let input_dir = temp.path().join("input");
    let output_dir = temp.path().join("output");
    setup_file(&input_dir, "a.md", "# A\n");
    setup_file(&input_dir, "docs/b.md", "# B\n");
    setup_file(&input_dir, "skip.txt", "plain\n");

    sop_doc()
        .arg(&input_dir)
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md: ok"));

    assert!(output_dir.join("a.md").exists());
    assert!(output_dir.join("docs/b.md").exists());
    assert!(!output_dir.join("skip.txt").exists());
}

#[test]
fn directory_run_emits_json_summary() {
    let temp = TempDir::new().expect("tempdir");
    let input_dir = temp.path().join("input");
    let output_dir = temp.path().join("output");
    setup_file(&input_dir, "guide.md", "# Guide\n");

    let output = sop_doc()
        .arg(&input_dir)
        .arg(&output_dir)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout utf8");
    assert!(stdout.contains("\"files\""));
    assert!(stdout.contains("guide.md"));
    assert!(stdout.contains("\"success\": true"));
}

#[test]
fn custom_config_can_disable_the_report() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "test.md", "# Title\n");
    setup_file(
        temp.path(),
        "config.yaml",
        "output:\n  include_report: false\n",
    );
    let output = temp.path().join("optimized.md");

    sop_doc()
        .arg(temp.path().join("test.md"))
        .arg(&output)
        .args(["--config"])
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success();

    assert!(output.exists());
    assert!(!temp.path().join("optimized_report.html").exists());
}

#[test]
fn invalid_config_is_fatal() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "test.md", "# Title\n");
    setup_file(temp.path(), "config.yaml", "optimization: [broken\n");

    sop_doc()
        .arg(temp.path().join("test.md"))
        .arg(temp.path().join("optimized.md"))
        .args(["--config"])
        .arg(temp.path().join("config.yaml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sop-doc error"));
}

#[test]
fn missing_config_path_falls_back_to_defaults() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "test.md", "# Title\n");
    let output = temp.path().join("optimized.md");

    sop_doc()
        .arg(temp.path().join("test.md"))
        .arg(&output)
        .args(["--config"])
        .arg(temp.path().join("does-not-exist.yaml"))
        .assert()
        .success();

    // Default config includes the HTML report.
    assert!(temp.path().join("optimized_report.html").exists());
}
