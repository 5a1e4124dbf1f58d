use predicates::prelude::*;

use crate::common::{TempTree, ext_lines};

#[test]
fn sums_files_sharing_an_extension() {
    let tree = TempTree::new("scenario");
    tree.write_lines("a.txt", 3);
    tree.write_lines("b.txt", 5);

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.txt 8\n");
}

#[test]
fn git_metadata_is_not_scanned() {
    let tree = TempTree::new("scenario");
    tree.write_file("sub/.git/HEAD", "ref: refs/heads/main\n");
    tree.write_file("sub/.git/refs/heads/main", "0123abcd\n");
    tree.write_lines("sub/main.go", 10);

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.go 10\n");
}

#[test]
fn dotless_files_contribute_nothing() {
    let tree = TempTree::new("scenario");
    tree.write_lines("README", 40);
    tree.write_lines("notes.md", 2);

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.md 2\n")
        .stderr("");
}

#[test]
fn dotted_directory_decides_the_key() {
    let tree = TempTree::new("scenario");
    tree.write_lines("v1.old/main.rs", 4);

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.old/main.rs 4\n");
}

#[test]
fn unterminated_last_line_and_empty_file() {
    let tree = TempTree::new("scenario");
    tree.write_file("a.sh", "echo 1\necho 2");
    tree.write_file("b.sh", "");

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with(".sh 2\n"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_reported_and_skipped() {
    use std::fs::{self, File, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let tree = TempTree::new("scenario");
    let locked = tree.write_lines("locked.bin", 7);
    tree.write_lines("ok.py", 4);
    fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the file; nothing to observe then.
    if File::open(&locked).is_ok() {
        return;
    }

    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.py 4\n")
        .stderr(predicate::str::contains(format!(
            "Could not open file {}",
            locked.canonicalize().unwrap().display()
        )));
}

#[cfg(unix)]
#[test]
fn linked_files_are_counted_and_dangling_links_reported() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new("scenario");
    let real = tree.write_lines("real.txt", 2);
    symlink(&real, tree.path().join("link.txt")).unwrap();
    symlink(tree.path().join("gone.md"), tree.path().join("dangling.md")).unwrap();

    let root = tree.path().canonicalize().unwrap();
    ext_lines()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Extensions\n.txt 4\n")
        .stderr(predicate::str::contains(format!(
            "Could not open file {}",
            root.join("dangling.md").display()
        )));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_aborts_the_run() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let tree = TempTree::new("scenario");
    tree.write_lines("ok.py", 4);
    tree.write_lines("locked/inner.py", 1);
    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = ext_lines().arg(tree.path()).assert();
    fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

    assert
        .failure()
        .stderr(predicate::str::starts_with("Application Error:"));
}

#[test]
fn repeated_runs_match() {
    let tree = TempTree::new("scenario");
    tree.write_lines("src/main.rs", 12);
    tree.write_lines("src/lib.rs", 30);
    tree.write_lines("docs/guide.md", 8);
    tree.write_lines("Makefile", 3);

    let first = ext_lines().arg(tree.path()).output().unwrap();
    let second = ext_lines().arg(tree.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let stdout = String::from_utf8(first.stdout).unwrap();
    assert!(stdout.starts_with("Extensions\n"));
    assert!(stdout.contains(".rs 42\n"));
    assert!(stdout.contains(".md 8\n"));
}
