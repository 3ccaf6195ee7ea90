use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

/// A command running in an empty temp dir, so no stray config is picked up.
fn isolated(temp_dir: &TempDir) -> Command {
    let mut cmd = bookshelf_cmd();
    cmd.current_dir(temp_dir.path()).env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_seeded_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ author(id: 1) { name books { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J. K. Rowling"))
        .stdout(predicate::str::contains("Harry Potter and the Goblet of Fire"))
        .stdout(predicate::str::contains("The Two Towers").not());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "query",
            "query One($id: Int!) { book(id: $id) { name } }",
            "--variables",
            r#"{"id": 8}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beyond the Shadows"));
}

#[test]
fn test_query_missing_is_null() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ book(id: 404) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"book\": null"));
}

#[test]
fn test_query_invalid_document_fails() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ nope }"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_query_bad_variables_fails() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["query", "{ books { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

#[test]
fn test_no_seed_starts_empty() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["--no-seed", "query", "{ authors { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authors\": []"));
}

// =============================================================================
// Mutate
// =============================================================================

#[test]
fn test_mutate_add_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["mutate", r#"addAuthor(name: "Ursula K. Le Guin") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("Ursula K. Le Guin"));
}

#[test]
fn test_mutate_orphan_book() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args([
            "mutate",
            r#"addBook(name: "Lost", authorId: 9999) { id author { name } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"author\": null"));
}

#[test]
fn test_mutate_empty_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .args(["mutate", r#"addAuthor(name: "") { id }"#])
        .assert()
        .failure();
}

// =============================================================================
// Schema & config
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    isolated(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Query {"))
        .stdout(predicate::str::contains("type Mutation {"))
        .stdout(predicate::str::contains("MutationRoot").not());
}

#[test]
fn test_config_file_disables_seed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".bookshelf.yml"),
        "store:\n  seed: false\n",
    )
    .unwrap();

    isolated(&temp_dir)
        .args(["query", "{ books { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"books\": []"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    std::fs::write(&config_path, "server:\n  path: no-slash\n").unwrap();

    isolated(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["query", "{ books { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
