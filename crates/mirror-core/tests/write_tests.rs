//! Tests for one-way reconciliation

use mirror_core::{CANONICAL_DIR, CheckStatus, MIRROR_DIR, MirrorEngine, MirrorLayout};
use mirror_test_utils::TestMirror;
use pretty_assertions::assert_eq;

fn setup() -> (TestMirror, MirrorEngine) {
    let repo = TestMirror::new(CANONICAL_DIR, MIRROR_DIR);
    let engine = MirrorEngine::new(MirrorLayout::new(repo.root())).unwrap();
    (repo, engine)
}

#[test]
fn write_creates_missing_mirror_directory() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");

    let report = engine.write().unwrap();

    assert_eq!(report.copied, 1);
    assert_eq!(report.changed, 1);
    repo.assert_mirror_exists("Foo.cs");
    repo.assert_mirror_matches_canonical("Foo.cs");
    assert_eq!(report.verification.status, CheckStatus::Healthy);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn write_with_empty_canonical_creates_mirror_directory() {
    let (repo, engine) = setup();

    let report = engine.write().unwrap();

    assert_eq!(report.copied, 0);
    assert!(repo.mirror_path("").is_dir());
    assert_eq!(report.verification.status, CheckStatus::Empty);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn write_with_empty_canonical_prunes_whole_mirror() {
    let (repo, engine) = setup();
    repo.create_canonical_dir();
    repo.write_mirror("Extra.cs", "class Extra {}");
    repo.write_mirror("Extra.cs.meta", "guid: 1");

    let report = engine.write().unwrap();

    assert_eq!(report.removed, 1);
    assert!(repo.mirror_names().is_empty());
}

#[test]
fn write_fixes_stale_content() {
    let (repo, engine) = setup();
    repo.write_canonical("Bar.cs", "class Bar { int current; }");
    repo.write_mirror("Bar.cs", "class Bar { int old; }");

    let report = engine.write().unwrap();

    assert_eq!(report.changed, 1);
    repo.assert_mirror_matches_canonical("Bar.cs");
    assert!(report.verification.is_clean());
}

#[test]
fn write_copies_sidecars_and_overwrites_existing() {
    let (repo, engine) = setup();
    repo.write_canonical("Baz.cs", "class Baz {}");
    repo.write_canonical("Baz.cs.meta", "guid: canonical");
    repo.write_mirror("Baz.cs.meta", "guid: stale");

    let report = engine.write().unwrap();

    assert_eq!(report.sidecars, 1);
    assert_eq!(repo.read_mirror("Baz.cs.meta"), b"guid: canonical");
}

#[test]
fn write_leaves_no_sidecar_when_canonical_has_none() {
    let (repo, engine) = setup();
    repo.write_canonical("Baz.cs", "class Baz {}");
    repo.write_mirror("Baz.cs", "class Baz {}");
    repo.write_mirror("Baz.cs.meta", "guid: leftover");

    let report = engine.write().unwrap();

    assert_eq!(report.sidecars, 0);
    assert_eq!(report.sidecars_removed, 1);
    repo.assert_mirror_missing("Baz.cs.meta");
    assert_eq!(repo.mirror_names(), vec!["Baz.cs"]);
}

#[test]
fn write_removes_orphans_and_their_sidecars() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");
    repo.write_mirror("Extra.cs", "class Extra {}");
    repo.write_mirror("Extra.cs.meta", "guid: extra");
    repo.write_mirror("Lonely.cs", "class Lonely {}");

    let report = engine.write().unwrap();

    assert_eq!(report.removed, 2);
    assert_eq!(repo.mirror_names(), vec!["Foo.cs"]);
}

#[test]
fn write_keeps_unrelated_mirror_files() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");
    repo.write_mirror("README.md", "not a source file");

    engine.write().unwrap();

    assert_eq!(repo.mirror_names(), vec!["Foo.cs", "README.md"]);
}

#[test]
fn write_preserves_modification_time() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");
    let old = filetime::FileTime::from_unix_time(1_500_000_000, 0);
    filetime::set_file_mtime(repo.canonical_path("Foo.cs"), old).unwrap();

    engine.write().unwrap();

    let metadata = std::fs::metadata(repo.mirror_path("Foo.cs")).unwrap();
    assert_eq!(filetime::FileTime::from_last_modification_time(&metadata), old);
}

#[test]
fn second_write_changes_nothing() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");
    repo.write_canonical("Bar.cs", "class Bar {}");
    repo.write_canonical("Bar.cs.meta", "guid: bar");
    repo.write_mirror("Extra.cs", "class Extra {}");

    let first = engine.write().unwrap();
    let second = engine.write().unwrap();

    assert_eq!(first.changed, 2);
    assert_eq!(first.removed, 1);
    assert_eq!(second.copied, 2);
    assert_eq!(second.changed, 0);
    assert_eq!(second.removed, 0);
    assert_eq!(second.sidecars_removed, 0);
    assert_eq!(second.exit_code(), 0);
}

#[test]
fn write_fails_when_mirror_path_is_a_file() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo {}");
    let mirror_dir = repo.mirror_path("");
    std::fs::create_dir_all(mirror_dir.parent().unwrap()).unwrap();
    std::fs::write(repo.root().join(MIRROR_DIR), "not a directory").unwrap();

    assert!(engine.write().is_err());
}

#[cfg(unix)]
#[test]
fn write_refuses_mirror_file_linked_to_canonical() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo { int important; }");
    repo.create_mirror_dir();
    std::os::unix::fs::symlink(repo.canonical_path("Foo.cs"), repo.mirror_path("Foo.cs")).unwrap();

    assert!(engine.write().is_err());
    assert_eq!(repo.read_canonical("Foo.cs"), b"class Foo { int important; }");
}

#[cfg(unix)]
#[test]
fn write_refuses_mirror_directory_linked_to_canonical() {
    let (repo, engine) = setup();
    repo.write_canonical("Foo.cs", "class Foo { int important; }");
    repo.write_canonical("Foo.cs.meta", "guid: foo");
    let mirror_dir = repo.root().join(MIRROR_DIR);
    std::fs::create_dir_all(mirror_dir.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(repo.root().join(CANONICAL_DIR), &mirror_dir).unwrap();

    let err = engine.write().unwrap_err();

    assert!(err.to_string().contains("resolves to the canonical directory"), "got: {err}");
    assert_eq!(repo.read_canonical("Foo.cs"), b"class Foo { int important; }");
    assert_eq!(repo.read_canonical("Foo.cs.meta"), b"guid: foo");
}
