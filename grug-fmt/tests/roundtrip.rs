// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! End-to-end round-trip properties over the four public operations.

use std::fs;
use std::path::Path;

use grug_fmt::{apply_file, apply_tree, dump_file, dump_tree, TreeOptions};
use similar::{ChangeTag, TextDiff};

fn assert_round_trip(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }
    let diff = TextDiff::from_lines(expected, actual);
    let mut rendered = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        rendered.push_str(sign);
        rendered.push_str(change.as_str().unwrap_or(""));
    }
    panic!("round trip mismatch:\n{rendered}");
}

fn dump_and_apply(source: &str) -> (String, String) {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("a.grug");
    let json_path = dir.path().join("a.json");
    let output_path = dir.path().join("b.grug");

    fs::write(&source_path, source).unwrap();
    dump_file(&source_path, &json_path).unwrap();
    let dumped = fs::read_to_string(&json_path).unwrap();
    apply_file(&json_path, &output_path).unwrap();
    let applied = fs::read_to_string(&output_path).unwrap();

    (dumped, applied)
}

#[test]
fn empty_function_round_trips() {
    let source = "on_init() {\n}\n";
    let (dumped, applied) = dump_and_apply(source);
    assert_eq!(dumped, "[{\"type\":\"GLOBAL_ON_FN\",\"name\":\"on_init\"}]\n");
    assert_round_trip(source, &applied);
}

#[test]
fn binary_expression_precedence_round_trips() {
    let source = "x: i32 = 1 + 2 * 3\n";
    let (dumped, applied) = dump_and_apply(source);
    assert!(dumped.contains(r#""left_expr":{"type":"I32_EXPR","value":"1"}"#));
    assert!(dumped.contains(r#""type":"BINARY_EXPR","left_expr":{"type":"I32_EXPR","value":"2"}"#));
    assert_round_trip(source, &applied);
}

#[test]
fn else_if_chain_round_trips_without_extra_braces() {
    let source = "on_tick() {\n    if a() {\n    } else if b() {\n    } else {\n    }\n}\n";
    let (dumped, applied) = dump_and_apply(source);
    assert!(dumped.contains(r#""else_statements":[{"type":"IF_STATEMENT""#));
    assert_round_trip(source, &applied);
}

#[test]
fn interior_comment_round_trips() {
    let source = "on_tick() {\n    while true {\n        # hello\n    }\n}\n";
    let (_, applied) = dump_and_apply(source);
    assert_round_trip(source, &applied);
}

#[test]
fn unary_not_of_parenthesized_logical_round_trips() {
    let source = "on_check() {\n    if not (a and b) {\n    }\n}\n";
    let (dumped, applied) = dump_and_apply(source);
    assert!(dumped.contains(r#""type":"UNARY_EXPR","operator":"NOT_TOKEN""#));
    assert_round_trip(source, &applied);
}

#[test]
fn blank_lines_between_globals_round_trip() {
    let source = "# header\n\ncounter: i32 = 0\n\non_init() {\n}\n";
    let (_, applied) = dump_and_apply(source);
    assert_round_trip(source, &applied);
}

fn write_tree(root: &Path) {
    fs::create_dir_all(root.join("mods/foo")).unwrap();
    fs::write(root.join("mods/foo/a.grug"), "on_init() {\n}\n").unwrap();
    fs::write(root.join("mods/bar.grug"), "counter: i32 = 0\n").unwrap();
}

#[test]
fn tree_dumps_with_dirs_before_files_and_round_trips() {
    let source_dir = tempfile::tempdir().unwrap();
    write_tree(source_dir.path());

    let json_path = source_dir.path().join("tree.json");
    dump_tree(&source_dir.path().join("mods"), &json_path, TreeOptions { sorted: true }).unwrap();

    let dumped = fs::read_to_string(&json_path).unwrap();
    assert!(dumped.starts_with(r#"{"dirs":{"foo":{"files":{"a.grug":"#));
    assert!(dumped.contains(r#""files":{"bar.grug":"#));

    let output_dir = tempfile::tempdir().unwrap();
    let target = output_dir.path().join("mods");
    apply_tree(&json_path, &target).unwrap();

    assert_eq!(fs::read_to_string(target.join("foo/a.grug")).unwrap(), "on_init() {\n}\n");
    assert_eq!(fs::read_to_string(target.join("bar.grug")).unwrap(), "counter: i32 = 0\n");
}

#[test]
fn apply_tree_is_idempotent_when_directories_already_exist() {
    let source_dir = tempfile::tempdir().unwrap();
    write_tree(source_dir.path());
    let json_path = source_dir.path().join("tree.json");
    dump_tree(&source_dir.path().join("mods"), &json_path, TreeOptions::default()).unwrap();

    let output_dir = tempfile::tempdir().unwrap();
    let target = output_dir.path().join("mods");
    fs::create_dir_all(&target).unwrap();

    apply_tree(&json_path, &target).unwrap();
    apply_tree(&json_path, &target).unwrap();
}
