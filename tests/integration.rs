use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_go2md")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- file mode --

#[test]
fn file_mode_prints_markdown() {
    let assert = cmd().args(["-i", &fixture_path("demo.go")]).assert().success();
    assert_eq!(stdout_of(assert), fixture("demo.expected.md"));
}

#[test]
fn file_mode_passes_untagged_package_lines() {
    let assert = cmd().args(["-i", &fixture_path("notes.go")]).assert().success();
    assert_eq!(stdout_of(assert), fixture("notes.expected.md"));
}

#[test]
fn file_mode_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("API.md");

    cmd()
        .args(["-i", &fixture_path("demo.go")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation saved to"));

    assert_eq!(fs::read_to_string(&out).unwrap(), fixture("demo.expected.md"));
}

#[test]
fn output_file_is_overwritten_identically() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("API.md");
    fs::write(&out, "stale").unwrap();

    for _ in 0..2 {
        cmd()
            .args(["-i", &fixture_path("demo.go")])
            .args(["-o", out.to_str().unwrap()])
            .assert()
            .success();
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), fixture("demo.expected.md"));
}

#[test]
fn unreadable_input_is_skipped() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-i", dir.path().join("missing.go").to_str().unwrap()])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn syntax_error_is_skipped() {
    cmd()
        .args(["-i", &fixture_path("broken.go")])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("API.md");

    cmd()
        .args(["-i", &fixture_path("demo.go")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
    assert!(!out.exists());
}

// -- directory mode --

#[test]
fn directory_mode_concatenates_in_walk_order() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::copy(fixture_path("notes.go"), dir.path().join("b.go")).unwrap();
    fs::copy(fixture_path("demo.go"), dir.path().join("a.go")).unwrap();
    fs::copy(fixture_path("broken.go"), dir.path().join("sub").join("c.go")).unwrap();
    fs::write(dir.path().join("README.md"), "# not go\n").unwrap();

    let assert = cmd()
        .args(["-r", dir.path().to_str().unwrap()])
        .assert()
        .success();
    let expected = format!(
        "{}{}",
        fixture("demo.expected.md"),
        fixture("notes.expected.md")
    );
    assert_eq!(stdout_of(assert), expected);
}

#[test]
fn directory_mode_is_deterministic() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture_path("demo.go"), dir.path().join("z.go")).unwrap();
    fs::copy(fixture_path("notes.go"), dir.path().join("m.go")).unwrap();

    let first = stdout_of(cmd().args(["-r", dir.path().to_str().unwrap()]).assert().success());
    let second = stdout_of(cmd().args(["-r", dir.path().to_str().unwrap()]).assert().success());
    assert_eq!(first, second);
    assert!(first.starts_with("// notes.go collects loose notes.\n"));
}

#[test]
fn directory_mode_excludes() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture_path("demo.go"), dir.path().join("demo.go")).unwrap();
    fs::copy(fixture_path("notes.go"), dir.path().join("notes_test.go")).unwrap();

    let assert = cmd()
        .args(["-r", dir.path().to_str().unwrap()])
        .args(["-x", "*_test.go"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), fixture("demo.expected.md"));
}

#[test]
fn empty_directory_renders_nothing() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-r", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-r", dir.path().join("nope").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to walk"));
}

#[test]
fn invalid_exclude_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-r", dir.path().to_str().unwrap()])
        .args(["-x", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid exclude pattern"));
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd().write_stdin(fixture("demo.go")).assert().success();
    assert_eq!(stdout_of(assert), fixture("demo.expected.md"));
}

#[test]
fn piped_stdin_wins_over_input_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("f.go");
    fs::write(&file, "package f\n\nfunc FromFile() {}\n").unwrap();

    let assert = cmd()
        .args(["-i", file.to_str().unwrap()])
        .write_stdin("package s\n\nfunc FromStdin() {}\n")
        .assert()
        .success();
    assert_eq!(stdout_of(assert), "## Function: FromStdin\n\n");
}

#[test]
fn lone_declarations_render_without_doc_text() {
    let input = "package p\n\n// C doc\nconst C = 1\n\n// T doc\ntype T int\n";
    let assert = cmd().write_stdin(input).assert().success();
    assert_eq!(stdout_of(assert), "## C (const)\n\n## Type: T\n\n");
}

#[test]
fn no_input_provided() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("API.md");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provided!"));
    assert!(!out.exists());
}

// -- package styles --

#[test]
fn strict_style_drops_untagged_package_lines() {
    let assert = cmd()
        .args(["-i", &fixture_path("notes.go")])
        .args(["--package-style", "strict"])
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.starts_with("# Package:  notes\n\n"), "got: {output}");
    assert!(!output.contains("collects loose notes"));
}

#[test]
fn verbatim_style_keeps_raw_package_doc() {
    let assert = cmd()
        .args(["-i", &fixture_path("demo.go")])
        .args(["--package-style", "verbatim"])
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.starts_with(
        "# demo\n\n// Package: demo\n// Description: a demo\n// Git Repository: http://x\n// License: MIT\n\n## Greeting (const)\n\n"
    ));
}

#[test]
fn end_to_end_tag_block() {
    let input = "// Package: demo\n// Description: a demo\n// Git Repository: http://x\n// License: MIT\npackage demo\n\n// Title: T\n// Description: D\nfunc Foo() {}\n";
    let assert = cmd().write_stdin(input).assert().success();
    assert_eq!(
        stdout_of(assert),
        "# Package:  demo\n\n\
         **Description:**  a demo\n\n\
         **Git Repository:**  http://x\n\n\
         **License:**  MIT\n\n\
         ## Function: Foo\n\n\
         **Title:**  T\n\n\
         **Description:**  D\n\n\
         **Function:** \n\n\
         **Called With:** \n\n\
         **Example:** \n\n\
         **Expected Output:** \n\n"
    );
}
