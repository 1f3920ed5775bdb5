//! Integration tests for jls


use harness::{SAMPLE_TREE, TestTree, compact_names, long_names, run_jls};

#[test]
fn test_basic_listing() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &[]);
    assert!(success, "jls should succeed");
    assert_eq!(stdout, "LICENSE README.md ast go.mod lexer main.go token empty \n");
}

#[test]
fn test_show_all_flag() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-A"]);
    assert!(success);
    assert_eq!(compact_names(&stdout)[0], ".gitignore");
    assert_eq!(compact_names(&stdout).len(), 9);
}

#[test]
fn test_reverse_flag() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-r"]);
    assert!(success);
    assert_eq!(stdout, "empty token main.go lexer go.mod ast README.md LICENSE \n");
}

#[test]
fn test_time_sort_newest_first() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-t"]);
    assert!(success);
    assert_eq!(
        compact_names(&stdout),
        ["ast", "lexer", "token", "empty", "main.go", "go.mod", "LICENSE", "README.md"]
    );
}

#[test]
fn test_time_sort_reversed_is_oldest_first() {
    // -r under -t gives ascending time order.
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-t", "-r"]);
    assert!(success);
    assert_eq!(
        compact_names(&stdout),
        ["LICENSE", "README.md", "go.mod", "main.go", "empty", "token", "lexer", "ast"]
    );
}

#[test]
fn test_filter_dir() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["--filter=dir"]);
    assert!(success);
    assert_eq!(stdout, "ast lexer token empty \n");
}

#[test]
fn test_filter_file() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["--filter", "file", "-A"]);
    assert!(success);
    assert_eq!(stdout, ".gitignore LICENSE README.md go.mod main.go \n");
}

#[test]
fn test_long_format() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-l"]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8, "one line per visible entry: {}", stdout);
    assert!(lines[0].starts_with("drwxr-xr-x 1071 Nov "), "{}", lines[0]);
    assert!(lines[0].ends_with(" LICENSE"));
    for line in &lines {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 6, "permissions size month day time name: {}", line);
        assert_eq!(fields[3].len(), 2, "zero-padded day: {}", line);
        assert_eq!(fields[4].len(), 5, "HH:MM: {}", line);
    }
    assert!(stdout.ends_with(" empty\n"), "no trailing blank line: {:?}", stdout);
}

#[test]
fn test_long_format_human_readable() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-l", "-h", "lexer"]);
    assert!(success);

    let sizes: Vec<&str> = stdout
        .lines()
        .map(|line| line.split(' ').nth(1).unwrap())
        .collect();
    assert_eq!(sizes, ["1K", "227B", "2K"]);
}

#[test]
fn test_combined_short_flags() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["-ltr"]);
    assert!(success);
    assert_eq!(
        long_names(&stdout),
        ["LICENSE", "README.md", "go.mod", "main.go", "empty", "token", "lexer", "ast"]
    );
}

#[test]
fn test_navigate_into_directory() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["ast"]);
    assert!(success);
    assert_eq!(stdout, "go.mod ast.go \n");
}

#[test]
fn test_navigate_into_file_lists_nothing() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["lexer/lexer.go"]);
    assert!(success);
    assert_eq!(stdout, "\n");
}

#[test]
fn test_navigate_missing_path() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, stderr, success) = run_jls(tree.path(), &["-l", "lexer/missing.go"]);
    assert!(success, "a missing path is reported, not a failure");
    assert_eq!(
        stdout,
        "error: cannot access 'lexer/missing.go': No such file or directory\n"
    );
    assert!(stderr.is_empty(), "{}", stderr);
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, _) = run_jls(tree.path(), &["empty"]);
    assert_eq!(stdout, "\n");

    let (stdout, _stderr, _) = run_jls(tree.path(), &["-l", "empty"]);
    assert_eq!(stdout, "");
}

#[test]
fn test_input_flag() {
    let tree = TestTree::new(SAMPLE_TREE);
    tree.write_input("other.json", r#"{"contents": [{"name": "only"}]}"#);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["--input", "other.json"]);
    assert!(success);
    assert_eq!(stdout, "only \n");
}

#[test]
fn test_directory_then_file() {
    let tree = TestTree::new(
        r#"{"contents": [{"name": "a", "contents": []}, {"name": "b", "size": 2048, "time_modified": 100}]}"#,
    );

    let (stdout, _stderr, success) = run_jls(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "a b \n");
}

#[test]
fn test_last_path_argument_wins() {
    let tree = TestTree::new(SAMPLE_TREE);

    let (stdout, _stderr, success) = run_jls(tree.path(), &["lexer", "-r", "ast"]);
    assert!(success);
    assert_eq!(stdout, "ast.go go.mod \n");
}
