use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const MOURN: &str = "mourn - self worth - 01 this feeling is disgusting.flac";
const MOURN_RENAMED: &str = "01 this feeling is disgusting.flac";

fn br() -> Command {
    Command::cargo_bin("br").unwrap()
}

#[test]
fn test_renames_in_current_directory_by_default() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child(MOURN).touch().unwrap();

    br().current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("renaming files in"))
        .stdout(predicate::str::contains(format!(
            "renaming '{MOURN}' to '{MOURN_RENAMED}'"
        )));

    temp_dir.child(MOURN).assert(predicate::path::missing());
    temp_dir.child(MOURN_RENAMED).assert(predicate::path::exists());
}

#[test]
fn test_relative_folder_argument() {
    let temp_dir = TempDir::new().unwrap();
    let album = temp_dir.child("self worth");
    album.create_dir_all().unwrap();
    album.child(MOURN).write_str("flac bytes").unwrap();

    br().current_dir(temp_dir.path())
        .arg("self worth")
        .assert()
        .success()
        .stdout(predicate::str::contains("self worth"));

    album.child(MOURN_RENAMED).assert("flac bytes");
}

#[test]
fn test_only_renamable_file_changes() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child(MOURN).touch().unwrap();
    temp_dir.child("readme.txt").touch().unwrap();
    temp_dir.child("livealbum - bandname.mp3").touch().unwrap();

    br().current_dir(temp_dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("readme.txt").not())
        .stdout(predicate::str::contains("livealbum").not());

    temp_dir.child(MOURN_RENAMED).assert(predicate::path::exists());
    temp_dir.child("readme.txt").assert(predicate::path::exists());
    temp_dir
        .child("livealbum - bandname.mp3")
        .assert(predicate::path::exists());
}

#[test]
fn test_flag_prints_usage_and_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child(MOURN).touch().unwrap();

    br().current_dir(temp_dir.path())
        .arg("-x")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: br [folder]"));

    temp_dir.child(MOURN).assert(predicate::path::exists());
}

#[test]
fn test_help_requests_print_usage() {
    for arg in ["-?", "/?", "--help", "-h", "?"] {
        br().arg(arg)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage: br [folder]"));
    }
}

#[test]
fn test_two_arguments_print_usage() {
    br().args(["one", "two"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: br [folder]"));
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    br().current_dir(temp_dir.path())
        .arg("does not exist")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("Usage: br [folder]"));
}

#[test]
fn test_existing_target_is_reported_and_others_continue() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child(MOURN).write_str("new").unwrap();
    temp_dir.child(MOURN_RENAMED).write_str("old").unwrap();
    temp_dir.child("mourn - self worth - 02 apathy.flac").touch().unwrap();

    br().current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("failed to rename '{MOURN}'")))
        .stdout(predicate::str::contains(
            "renaming 'mourn - self worth - 02 apathy.flac' to '02 apathy.flac'",
        ));

    temp_dir.child(MOURN_RENAMED).assert("old");
    temp_dir.child(MOURN).assert("new");
    temp_dir.child("02 apathy.flac").assert(predicate::path::exists());
}

#[test]
fn test_subdirectories_are_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.child("disc 2");
    nested.create_dir_all().unwrap();
    nested.child(MOURN).touch().unwrap();

    br().current_dir(temp_dir.path()).assert().success();

    nested.child(MOURN).assert(predicate::path::exists());
}

#[test]
fn test_uppercase_extension_is_renamed() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("band - album - 07 loud.FLAC").touch().unwrap();

    br().current_dir(temp_dir.path()).assert().success();

    temp_dir.child("07 loud.FLAC").assert(predicate::path::exists());
}
