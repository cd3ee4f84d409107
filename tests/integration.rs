//! Integration tests for canopy


use std::fs;

use harness::{run_canopy, TestTree};

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success, "canopy should succeed");
    assert!(stdout.contains("main.rs"), "should show main.rs");
    assert!(stdout.contains("lib.rs"), "should show lib.rs");
    assert!(stdout.contains("files"), "should show the summary footer");
}

#[test]
fn test_text_artifact_written() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success);

    let artifact = tree.path().join(format!("{}.txt", tree.root_name()));
    assert!(artifact.exists(), "text artifact should be written");
    assert!(
        stdout.contains("wrote "),
        "should report the written artifact: {}",
        stdout
    );

    let contents = fs::read_to_string(&artifact).unwrap();
    assert!(contents.contains("main.rs"));
    assert!(contents.contains("Generated:"));
    assert!(contents.contains("directories"));
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "fn top() {}");
    tree.add_file("level1/mid.rs", "fn mid() {}");
    tree.add_file("level1/level2/deep.rs", "fn deep() {}");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["-L", "1"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("level1"), "should show first level dir");
    assert!(
        !stdout.contains("mid.rs"),
        "should not descend past the limit: {}",
        stdout
    );
}

#[test]
fn test_dirs_only() {
    let tree = TestTree::new();
    tree.add_file("file.rs", "fn file() {}");
    tree.add_file("subdir/nested.rs", "fn nested() {}");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["-d"]);
    assert!(success);
    assert!(
        !stdout.contains("file.rs"),
        "should not show files: {}",
        stdout
    );
    assert!(stdout.contains("subdir"), "should show directories");
}

#[test]
fn test_icons_flag() {
    let tree = TestTree::new();
    tree.add_file("script.py", "print('hi')");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["--icons"]);
    assert!(success);
    assert!(stdout.contains("🐍"), "python files get the snake: {}", stdout);
    assert!(stdout.contains("📁"), "the root gets a folder icon");
}

#[test]
fn test_size_flag() {
    let tree = TestTree::new();
    tree.add_file("data.bin", "12345678");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["-s"]);
    assert!(success);
    assert!(stdout.contains("(8B)"), "sizes follow filenames: {}", stdout);
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["--json"]);
    assert!(success);

    // Everything before the artifact report is one JSON document.
    let json_part: String = stdout
        .lines()
        .take_while(|l| !l.starts_with("wrote "))
        .collect::<Vec<_>>()
        .join("\n");
    let parsed: serde_json::Value = serde_json::from_str(&json_part).expect("valid JSON");
    assert_eq!(parsed["total_files"], 1);
    assert_eq!(parsed["root"]["kind"], "directory");
}

#[test]
fn test_all_artifact_formats() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_dir("out");

    let (_stdout, stderr, success) = run_canopy(
        tree.path(),
        &["-f", "text,png,svg,pdf", "-o", "out"],
    );
    assert!(success, "all formats should render: {}", stderr);

    let stem = tree.root_name();
    let out = tree.path().join("out");

    let txt = fs::read_to_string(out.join(format!("{}.txt", stem))).unwrap();
    assert!(txt.contains("main.rs"));

    let png = fs::read(out.join(format!("{}.png", stem))).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G'], "PNG magic bytes");

    let svg = fs::read_to_string(out.join(format!("{}.svg", stem))).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("main.rs"));

    let pdf = fs::read(out.join(format!("{}.pdf", stem))).unwrap();
    assert_eq!(&pdf[..4], b"%PDF", "PDF magic bytes");
}

#[test]
fn test_missing_root_fails() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("canopy")
        .unwrap()
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_file_root_fails() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let tree = TestTree::new();
    let file = tree.add_file("plain.txt", "x");

    Command::cargo_bin("canopy")
        .unwrap()
        .arg(file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_invalid_config_fails() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let tree = TestTree::new();
    Command::cargo_bin("canopy")
        .unwrap()
        .arg(tree.path())
        .args(["--max-rows", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
