//! Edge-case tests for canopy


use std::fs;

use harness::{run_canopy, TestTree};

#[test]
fn test_depth_zero_shows_root_only() {
    let tree = TestTree::new();
    tree.add_file("a/file.txt", "x");
    tree.add_file("top.txt", "y");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["-L", "0"]);
    assert!(success);
    assert!(!stdout.contains("top.txt"), "no children at depth 0: {}", stdout);
    assert!(!stdout.contains("file.txt"));
    assert!(
        stdout.contains("0 directories, 0 files"),
        "empty totals: {}",
        stdout
    );
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("0 directories, 0 files"));
}

#[cfg(unix)]
#[test]
fn test_inaccessible_entry_keeps_siblings() {
    let tree = TestTree::new();
    tree.add_file("readable.txt", "ok");
    std::os::unix::fs::symlink("/nowhere", tree.path().join("dangling")).unwrap();

    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success, "one bad entry must not abort the run");
    assert!(stdout.contains("readable.txt"), "siblings survive: {}", stdout);
    assert!(
        stdout.contains("dangling [inaccessible]"),
        "bad entry is marked: {}",
        stdout
    );
}

#[test]
fn test_max_files_truncation_marker() {
    let tree = TestTree::new();
    for i in 0..5 {
        tree.add_file(&format!("file_{}.txt", i), "x");
    }

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["--max-files", "2"]);
    assert!(success);
    assert!(stdout.contains("file_0.txt"));
    assert!(stdout.contains("file_1.txt"));
    assert!(!stdout.contains("file_4.txt"));
    assert!(
        stdout.contains("... (3 more entries)"),
        "surplus collapses into one marker: {}",
        stdout
    );
}

#[test]
fn test_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_file("keep.rs", "k");
    tree.add_file("noise.log", "n");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["-I", "*.log"]);
    assert!(success);
    assert!(stdout.contains("keep.rs"));
    assert!(!stdout.contains("noise.log"), "{}", stdout);
}

#[test]
fn test_default_excludes_apply() {
    let tree = TestTree::new();
    tree.add_file("node_modules/dep/index.js", "x");
    tree.add_file("src/main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("src"));
    assert!(!stdout.contains("node_modules"), "{}", stdout);
}

#[test]
fn test_hidden_files_skipped_by_default() {
    let tree = TestTree::new();
    tree.add_file(".secret", "s");
    tree.add_file("visible.txt", "v");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &[]);
    assert!(success);
    assert!(!stdout.contains(".secret"));

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["--hidden"]);
    assert!(success);
    assert!(stdout.contains(".secret"), "{}", stdout);
}

#[test]
fn test_minimal_style() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["--style", "minimal"]);
    assert!(success);
    assert!(stdout.contains("+ a.txt"), "{}", stdout);
    assert!(!stdout.contains("└"), "minimal style is pure ASCII: {}", stdout);
}

#[test]
fn test_blocked_output_dir_warns_and_fails() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("blocked", "a plain file where the output dir should be");

    let (_stdout, stderr, success) = run_canopy(tree.path(), &["-o", "blocked"]);
    assert!(!success, "nothing could be written");
    assert!(
        stderr.contains("canopy: warning:"),
        "failures surface as warnings: {}",
        stderr
    );
}

#[test]
fn test_unicode_names_survive_all_text_formats() {
    let tree = TestTree::new();
    tree.add_file("naïve café.txt", "utf8");
    tree.add_dir("out");

    let (_stdout, _stderr, success) =
        run_canopy(tree.path(), &["-f", "text,svg", "-o", "out"]);
    assert!(success);

    let stem = tree.root_name();
    let out = tree.path().join("out");
    let txt = fs::read_to_string(out.join(format!("{}.txt", stem))).unwrap();
    assert!(txt.contains("naïve café.txt"));
    let svg = fs::read_to_string(out.join(format!("{}.svg", stem))).unwrap();
    assert!(svg.contains("naïve café.txt"));
}
