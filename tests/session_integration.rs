use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn pancake(save_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pancake").unwrap();
    cmd.env("NO_COLOR", "1").arg("--save-file").arg(save_file);
    cmd
}

#[test]
fn buy_milk_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin(
            "new buy milk\ntasks\ncomplete buy milk\ntasks\nadvancement\n\
             remove buy milk\ntrash\nrecover buy milk\ntasks\nexit\nn\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome in PanCake"))
        .stdout(predicate::str::contains("1. buy milk - Unfinished"))
        .stdout(predicate::str::contains("1. buy milk - Complete"))
        .stdout(predicate::str::contains("You have completed 1 tasks."))
        .stdout(predicate::str::contains("You have 0 more tasks to complete."))
        .stdout(predicate::str::contains("1. buy milk\n"));

    // exit without confirming does not save
    assert!(!save_file.exists());
}

#[test]
fn pinned_tasks_are_listed_first() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("new chores\nnew taxes\npin taxes\ntasks\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--> IMPORTANT TASKS\n* 1. taxes - Unfinished\n--------------------------------------\n1. chores - Unfinished",
        ));
}

#[test]
fn saved_session_is_loaded_on_next_start() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("new a\nnew b\ncomplete b\nsave\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let raw = std::fs::read_to_string(&save_file).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["tasks"]["a"], "Unfinished");
    assert_eq!(doc["tasks"]["b"], "Complete");
    assert_eq!(doc["complete"], 1);
    assert_eq!(doc["unfinished"], 1);
    assert_eq!(doc["logs-status"], 1);
    assert_eq!(doc["history"][0], "new a");

    pancake(&save_file)
        .write_stdin("tasks\nhistory\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks loaded successfully."))
        .stdout(predicate::str::contains("1. a - Unfinished"))
        .stdout(predicate::str::contains("2. b - Complete"))
        .stdout(predicate::str::contains("3. complete b"));
}

#[test]
fn exit_can_save() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("new a\nexit\nY\n")
        .assert()
        .success();

    let raw = std::fs::read_to_string(&save_file).unwrap();
    assert!(raw.contains("\"a\""));
}

#[test]
fn wrong_password_leaves_task_visible() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("secrets-setpw\n\npw\npw\nn\nnew secret_x\nhide secret_x\nguess\ntasks\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong password."))
        .stdout(predicate::str::contains("1. secret_x - Unfinished"));
}

#[test]
fn hidden_tasks_need_the_password_to_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("hide diary\n\nsecrets\n\ntasks\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password: 1. diary - Unfinished"));
}

#[test]
fn invalid_commands_are_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("dance\nnew\nexit\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid command. Type 'help' to see the commands list.")
                .count(2),
        );
}

#[test]
fn silent_logs_hide_errors_but_not_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("setlogs 0\nremove ghost\nlog still here\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("doesn't exist").not())
        .stdout(predicate::str::contains("still here"));
}

#[test]
fn corrupt_save_file_is_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");
    std::fs::write(&save_file, "{ \"tasks\": ").unwrap();

    pancake(&save_file)
        .write_stdin("new a\ntasks\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File may be corrupted"))
        .stdout(predicate::str::contains("1. a - Unfinished"));
}

#[test]
fn unreadable_save_path_is_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");
    std::fs::create_dir(&save_file).unwrap();

    pancake(&save_file)
        .write_stdin("new a\ntasks\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading tasks: can't read"))
        .stdout(predicate::str::contains("1. a - Unfinished"));
}

#[test]
fn load_without_save_file_reports_it() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("load\nexit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved tasks found."));
}

#[test]
fn closed_stdin_ends_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_file = temp_dir.path().join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("new a\n")
        .assert()
        .success();
}

#[test]
fn failed_save_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let save_file = blocker.join("saved_tasks.json");

    pancake(&save_file)
        .write_stdin("new a\nsave\ntasks\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"))
        .stdout(predicate::str::contains("1. a - Unfinished").not());
}
