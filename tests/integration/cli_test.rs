//! End-to-end tests for the `asana` binary

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::common::{Canned, FakeApi, TaskBuilder, fake_api};

/// Helper function to create an asana command isolated from the host config
fn asana(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("asana"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("ASANA_TOKEN")
        .env_remove("ASANA_WORKSPACE")
        .env_remove("ASANA_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command pointed at a fake API through the environment
fn asana_against(home: &Path, fake: &FakeApi) -> assert_cmd::Command {
    let mut cmd = asana(home);
    cmd.env("ASANA_TOKEN", fake_api::TOKEN)
        .env("ASANA_WORKSPACE", fake_api::WORKSPACE)
        .env("ASANA_API_URL", fake.base_url());
    cmd
}

// =============================================================================
// OFFLINE COMMANDS
// =============================================================================

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A command-line interface for Asana"))
        .stdout(predicate::str::contains("tasks"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("asana-cli v"));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    let output = asana(home.path()).args(["version", "--json"]).output().unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_configure_needs_no_credentials() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .arg("configure")
        .assert()
        .success()
        .stdout(predicate::str::contains("ASANA_TOKEN"))
        .stdout(predicate::str::contains("ASANA_WORKSPACE"));
}

#[test]
fn test_missing_token_fails() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .args(["tasks", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: ASANA_TOKEN not set."));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    asana(home.path())
        .args(["--config", "does-not-exist.env", "users", "me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config file"));
}

#[test]
fn test_update_without_changes_fails() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(Vec::new());
    asana_against(home.path(), &fake)
        .args(["tasks", "update", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
    assert!(!fake.saw_request());
}

// =============================================================================
// CONFIG FILES
// =============================================================================

#[test]
fn test_dotenv_in_current_directory() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(
        &json!({"gid": "u1", "name": "Ada Lovelace", "email": "ada@example.com"}),
    )]);
    fs::write(
        home.path().join(".env"),
        format!(
            "ASANA_TOKEN=file-token\nASANA_WORKSPACE=ws-file\nASANA_API_URL={}\n",
            fake.base_url()
        ),
    )
    .unwrap();

    asana(home.path())
        .args(["users", "me"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada Lovelace"))
        .stdout(predicate::str::contains("Email: ada@example.com"));

    let recorded = fake.next_request();
    assert_eq!(recorded.header("Authorization"), Some("Bearer file-token"));
}

#[test]
fn test_environment_overrides_dotenv() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([]))]);
    fs::write(home.path().join(".env"), "ASANA_TOKEN=file-token\n").unwrap();

    asana_against(home.path(), &fake)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));

    let recorded = fake.next_request();
    assert_eq!(recorded.header("Authorization"), Some("Bearer test-token"));
    assert_eq!(recorded.path(), "/workspaces/ws1/users");
}

// =============================================================================
// TASKS
// =============================================================================

#[test]
fn test_tasks_list_table() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([
        TaskBuilder::new("101")
            .name("Write report")
            .due("2025-06-20")
            .assignee("Ada")
            .project("p1", "Roadmap")
            .json(),
        TaskBuilder::new("102").name("Review PR").json(),
    ]))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "list", "--mine", "--due", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GID"))
        .stdout(predicate::str::contains("Write report"))
        .stdout(predicate::str::contains("Roadmap"))
        .stdout(predicate::str::contains("Review PR"))
        .stdout(predicate::str::contains("Showing").not());

    let recorded = fake.next_request();
    assert_eq!(recorded.param("assignee.any").as_deref(), Some("me"));
    assert!(recorded.param("due_on.before").is_some());
    assert!(recorded.param("due_on.after").is_some());
    assert!(recorded.param("sort_by").is_none());
}

#[test]
fn test_tasks_list_hits_limit() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([
        TaskBuilder::new("1").json(),
        TaskBuilder::new("2").json(),
    ]))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "list", "-l", "2", "--sort", "due_date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Showing 2 tasks, use -l to increase limit)"));

    let recorded = fake.next_request();
    assert_eq!(recorded.param("limit").as_deref(), Some("2"));
    assert_eq!(recorded.param("sort_by").as_deref(), Some("due_date"));
    assert_eq!(recorded.param("sort_ascending").as_deref(), Some("true"));
}

#[test]
fn test_tasks_list_empty() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([]))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));

    assert!(fake.next_request().param("completed").is_none());
}

#[test]
fn test_tasks_list_json() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([
        TaskBuilder::new("1").name("One").json(),
        TaskBuilder::new("2").name("Two").json(),
    ]))]);

    let output = asana_against(home.path(), &fake)
        .args(["--json", "tasks", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let tasks = value.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1]["name"], "Two");
}

#[test]
fn test_tasks_get_with_comments() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![
        Canned::data(&TaskBuilder::new("55").name("Plan launch").due("2000-01-01").json()),
        Canned::data(&json!([{
            "gid": "s1",
            "created_at": "2025-06-01T09:00:00Z",
            "created_by": {"gid": "u1", "name": "Grace"},
            "text": "Looks good",
            "type": "comment"
        }])),
        Canned::data(&json!([{"gid": "a1", "name": "plan.pdf", "size": 1536}])),
    ]);

    asana_against(home.path(), &fake)
        .args(["tasks", "get", "55", "--comments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task: Plan launch"))
        .stdout(predicate::str::contains("(overdue)"))
        .stdout(predicate::str::contains("plan.pdf (1.5 KB) [a1]"))
        .stdout(predicate::str::contains("[2025-06-01] Grace"))
        .stdout(predicate::str::contains("Looks good"));

    assert_eq!(fake.next_request().path(), "/tasks/55");
    assert_eq!(fake.next_request().path(), "/tasks/55/stories");
    assert_eq!(fake.next_request().path(), "/tasks/55/attachments");
}

#[test]
fn test_tasks_create() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!({
        "gid": "900",
        "name": "Ship it",
        "permalink_url": "https://app.asana.com/0/0/900"
    }))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "create", "Ship it", "-a", "me", "--tag", "t1", "--tag", "t2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task created successfully!"))
        .stdout(predicate::str::contains("GID: 900"))
        .stdout(predicate::str::contains("URL: https://app.asana.com/0/0/900"));

    let body = fake.next_request().json();
    assert_eq!(
        body,
        json!({"data": {
            "name": "Ship it",
            "assignee": "me",
            "tags": ["t1", "t2"],
            "workspace": "ws1"
        }})
    );
}

#[test]
fn test_tasks_complete() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(
        &json!({"gid": "5", "name": "Ship it", "completed": true}),
    )]);

    asana_against(home.path(), &fake)
        .args(["tasks", "complete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task completed: Ship it"));
}

#[test]
fn test_tasks_update_clear_due() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!({"gid": "5", "name": "Ship it"}))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "update", "5", "--clear-due", "--unassign"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task updated: Ship it"));

    assert_eq!(
        fake.next_request().json(),
        json!({"data": {"assignee": null, "due_on": null}})
    );
}

#[test]
fn test_tasks_delete_cancelled() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(Vec::new());

    asana_against(home.path(), &fake)
        .args(["tasks", "delete", "5"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));
    assert!(!fake.saw_request());
}

#[test]
fn test_tasks_delete_confirmed() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!({}))]);

    asana_against(home.path(), &fake)
        .args(["tasks", "delete", "5"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 5 deleted."));
    assert_eq!(fake.next_request().method, "DELETE");
}

#[test]
fn test_tasks_comment_html() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(
        &json!({"gid": "s9", "created_at": "2025-06-10T12:00:00Z"}),
    )]);

    asana_against(home.path(), &fake)
        .args(["tasks", "comment", "5", "<b>done</b>", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment added successfully (ID: s9)"));

    assert_eq!(
        fake.next_request().json(),
        json!({"data": {"html_text": "<body><b>done</b></body>"}})
    );
}

#[test]
fn test_api_error_exit_code() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::json(
        404,
        &json!({"errors": [{"message": "Not Found", "help": "check the gid"}]}),
    )]);

    asana_against(home.path(), &fake)
        .args(["tasks", "get", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: API error (404): Not Found"));
}

// =============================================================================
// SUMMARY AND ATTACHMENTS
// =============================================================================

#[test]
fn test_summary_json() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([
        TaskBuilder::new("1").due("2000-01-01").assignee("Ada").json(),
        TaskBuilder::new("2").completed().assignee("Ada").json(),
        TaskBuilder::new("3").json(),
    ]))]);

    let output = asana_against(home.path(), &fake)
        .args(["summary", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["open"], 2);
    assert_eq!(value["completed"], 1);
    assert_eq!(value["overdue"], 1);
    assert_eq!(value["unassigned"], 1);
    assert_eq!(value["by_assignee"]["Ada"], 2);

    assert!(fake.next_request().param("modified_on.after").is_some());
}

#[test]
fn test_summary_human() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([
        TaskBuilder::new("1").assignee("Ada").json(),
    ]))]);

    asana_against(home.path(), &fake)
        .args(["summary", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Tasks:     1"))
        .stdout(predicate::str::contains("Tasks by Assignee"))
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn test_attachment_download() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve_with(|base| {
        vec![
            Canned::data(&json!({
                "gid": "a1",
                "name": "notes.txt",
                "download_url": format!("{base}/signed/a1")
            })),
            Canned::bytes(b"attachment body"),
        ]
    });

    asana_against(home.path(), &fake)
        .args(["attachments", "download", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded: ./notes.txt"));

    assert_eq!(
        fs::read_to_string(home.path().join("notes.txt")).unwrap(),
        "attachment body"
    );
    assert_eq!(fake.next_request().path(), "/attachments/a1");
    let download = fake.next_request();
    assert_eq!(download.path(), "/signed/a1");
    assert_eq!(download.header("Authorization"), None);
}

/// Serve an attachment record with `name`, followed by its content
fn serve_named_attachment(name: &str) -> FakeApi {
    let name = name.to_string();
    FakeApi::serve_with(move |base| {
        vec![
            Canned::data(&json!({
                "gid": "a1",
                "name": name,
                "download_url": format!("{base}/signed/a1")
            })),
            Canned::bytes(b"remote content"),
        ]
    })
}

#[test]
fn test_attachment_download_absolute_name_stays_local() {
    let home = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let outside = elsewhere.path().join("keep.txt");
    fs::write(&outside, "untouched").unwrap();

    let fake = serve_named_attachment(&outside.to_string_lossy());

    asana_against(home.path(), &fake)
        .args(["attachments", "download", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded: ./keep.txt"));

    assert_eq!(fs::read_to_string(&outside).unwrap(), "untouched");
    assert_eq!(
        fs::read_to_string(home.path().join("keep.txt")).unwrap(),
        "remote content"
    );
}

#[test]
fn test_attachment_download_parent_dir_name_stays_local() {
    let root = TempDir::new().unwrap();
    let home = root.path().join("work");
    fs::create_dir(&home).unwrap();

    let fake = serve_named_attachment("../escape.txt");

    asana_against(&home, &fake)
        .args(["attachments", "download", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded: ./escape.txt"));

    assert!(!root.path().join("escape.txt").exists());
    assert_eq!(
        fs::read_to_string(home.join("escape.txt")).unwrap(),
        "remote content"
    );
}

#[test]
fn test_attachment_download_unusable_name_fails() {
    let home = TempDir::new().unwrap();
    let fake = serve_named_attachment("..");

    asana_against(home.path(), &fake)
        .args(["attachments", "download", "a1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a usable file name"));

    assert_eq!(fake.next_request().path(), "/attachments/a1");
    assert!(!fake.saw_request());
}

#[test]
fn test_attachment_download_explicit_output() {
    let home = TempDir::new().unwrap();
    let fake = serve_named_attachment("/etc/hostname");

    asana_against(home.path(), &fake)
        .args(["attachments", "download", "a1", "-o", "saved.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded: saved.txt"));

    assert_eq!(
        fs::read_to_string(home.path().join("saved.txt")).unwrap(),
        "remote content"
    );
}

#[test]
fn test_attachment_upload() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("diagram.png"), b"\x89PNG").unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!({"gid": "a7", "name": "diagram.png"}))]);

    asana_against(home.path(), &fake)
        .args(["attachments", "upload", "t1", "diagram.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File uploaded successfully!"))
        .stdout(predicate::str::contains("GID: a7"));

    let recorded = fake.next_request();
    assert_eq!(recorded.path(), "/tasks/t1/attachments");
    assert!(String::from_utf8_lossy(&recorded.body).contains("filename=\"diagram.png\""));
}

#[test]
fn test_attachment_list_empty() {
    let home = TempDir::new().unwrap();
    let fake = FakeApi::serve(vec![Canned::data(&json!([]))]);

    asana_against(home.path(), &fake)
        .args(["attachments", "list", "t1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attachments found."));
}
