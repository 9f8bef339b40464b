//! Tests for flat directory listing

use assert_fs::prelude::*;
use mirror_fs::{NormalizedPath, list_files_with_extension};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn lists_only_matching_files_sorted_by_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("VfxGraphRead.cs").write_str("read").unwrap();
    temp.child("ManageVfxGraph.cs").write_str("manage").unwrap();
    temp.child("VfxGraphEdit.cs").write_str("edit").unwrap();
    temp.child("VfxGraphEdit.cs.meta").write_str("guid: 1").unwrap();
    temp.child("README.md").write_str("docs").unwrap();

    let names = list_files_with_extension(&NormalizedPath::new(temp.path()), "cs").unwrap();

    assert_eq!(
        names,
        vec!["ManageVfxGraph.cs", "VfxGraphEdit.cs", "VfxGraphRead.cs"]
    );
}

#[test]
fn subdirectories_are_not_descended() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Top.cs").write_str("top").unwrap();
    temp.child("Nested/Inner.cs").write_str("inner").unwrap();
    temp.child("Folder.cs").create_dir_all().unwrap();

    let names = list_files_with_extension(&NormalizedPath::new(temp.path()), "cs").unwrap();

    assert_eq!(names, vec!["Top.cs"]);
}

#[rstest]
#[case("Tool.CS")]
#[case("Tool.csx")]
#[case("Tool.cs.meta")]
#[case("Toolcs")]
fn non_matching_names_are_ignored(#[case] name: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(name).write_str("x").unwrap();

    let names = list_files_with_extension(&NormalizedPath::new(temp.path()), "cs").unwrap();

    assert!(names.is_empty(), "{name} should not be listed, got {names:?}");
}

#[test]
fn empty_directory_lists_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    let names = list_files_with_extension(&NormalizedPath::new(temp.path()), "cs").unwrap();
    assert!(names.is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_followed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.child("real.txt");
    target.write_str("linked").unwrap();
    std::os::unix::fs::symlink(target.path(), temp.child("Linked.cs").path()).unwrap();

    let names = list_files_with_extension(&NormalizedPath::new(temp.path()), "cs").unwrap();

    assert_eq!(names, vec!["Linked.cs"]);
}
