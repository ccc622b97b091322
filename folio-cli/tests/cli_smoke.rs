//! Smoke tests for the folio binary

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn catalog_json() -> String {
    let posts: Vec<String> = (0..25)
        .map(|i| {
            let tags = if i % 8 == 3 { r#"["Python"]"# } else { r#"["Notes"]"# };
            format!(
                r#"{{"slug": "post-{i}", "title": "Post {i}", "summary": "Entry {i}", "date": "2024-01-{day:02}T09:00:00", "tags": {tags}}}"#,
                i = i,
                day = 25 - i,
                tags = tags
            )
        })
        .collect();

    format!(
        r#"{{
  "posts": [{}],
  "projects": [
    {{"title": "Log Analysis", "description": "Parses server logs", "href": "https://github.com/example/logs",
      "date": "2025-02-15T10:00:00", "techStack": ["Python", "SQLite"], "status": "Completed", "type": "Personal"}},
    {{"title": "ETL Pipeline", "description": "Loads a warehouse", "href": "https://github.com/example/etl",
      "date": "2025-03-01T10:00:00", "techStack": ["Python", "Airflow"], "status": "Active", "type": "Work"}}
  ]
}}"#,
        posts.join(",")
    )
}

struct Fixture {
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join("catalog.json"), catalog_json()).unwrap();
        Self { home }
    }

    fn catalog(&self) -> String {
        self.home.path().join("catalog.json").display().to_string()
    }

    fn path(&self) -> &Path {
        self.home.path()
    }

    fn folio(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").unwrap();
        cmd.env("HOME", self.home.path())
            .env_remove("FOLIO_CONFIG")
            .env_remove("FOLIO_BASE_PATH")
            .env_remove("RUST_LOG");
        cmd
    }
}

// === Help Wiring ===

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Extra pages to reveal"));
}

#[test]
fn test_browse_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("browse").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Which listing to browse"));
}

#[test]
fn test_config_init_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("config").arg("init").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Force overwrite"));
}

#[test]
fn test_help_lists_commands() {
    let fx = Fixture::new();
    fx.folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("browse"));
}

// === Listings ===

#[test]
fn test_list_posts_shows_first_page() {
    let fx = Fixture::new();
    fx.folio()
        .args(["list", "posts", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 25, 2024 09:00\nPost 0"))
        .stdout(predicate::str::contains("Post 9"))
        .stdout(predicate::str::contains("Post 10\n").not())
        .stdout(predicate::str::contains("Showing 10 of 25 (more available)"));
}

#[test]
fn test_list_posts_reveal_pages() {
    let fx = Fixture::new();
    fx.folio()
        .args(["list", "posts", "--reveal", "1", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 20 of 25 (more available)"));

    fx.folio()
        .args(["list", "posts", "--reveal", "5", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 25 of 25\n"));
}

#[test]
fn test_list_posts_query_shows_all_matches() {
    let fx = Fixture::new();
    fx.folio()
        .args(["list", "posts", "--query", "PYTHON", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post 3"))
        .stdout(predicate::str::contains("Post 11"))
        .stdout(predicate::str::contains("Post 19"))
        .stdout(predicate::str::contains("Showing 3 of 3\n"));
}

#[test]
fn test_list_projects_json_with_facets() {
    let fx = Fixture::new();
    let output = fx
        .folio()
        .args([
            "list",
            "projects",
            "--status",
            "active",
            "--format",
            "json",
            "--catalog",
            &fx.catalog(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["shown"], 1);
    assert_eq!(value["items"][0]["title"], "ETL Pipeline");
    assert_eq!(value["items"][0]["href"], "https://github.com/example/etl");
    assert_eq!(value["items"][0]["date"], "March 1, 2025");
}

#[test]
fn test_tags_counts_project_tags() {
    let fx = Fixture::new();
    fx.folio()
        .args(["tags", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Python (2)"))
        .stdout(predicate::str::contains("Airflow (1)"));
}

#[test]
fn test_missing_catalog_fails() {
    let fx = Fixture::new();
    fx.folio()
        .args(["list", "posts", "--catalog", "/no/such/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_page_links_neighbours() {
    let fx = Fixture::new();
    fx.folio()
        .args(["page", "posts", "2", "--catalog", &fx.catalog()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog - page 2 of 3"))
        .stdout(predicate::str::contains("Post 10"))
        .stdout(predicate::str::contains("Previous: http://localhost:3000/blog/\n"))
        .stdout(predicate::str::contains("Next: http://localhost:3000/blog/page/3"));
}

#[test]
fn test_page_out_of_range_fails() {
    let fx = Fixture::new();
    fx.folio()
        .args(["page", "posts", "9", "--catalog", &fx.catalog()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// === Config ===

#[test]
fn test_config_init_then_show() {
    let fx = Fixture::new();
    let config = fx.path().join("site.toml").display().to_string();

    fx.folio()
        .args(["--config", &config, "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    fx.folio()
        .args(["--config", &config, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fx.folio()
        .args(["--config", &config, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("posts_page_size = 10"));
}

#[test]
fn test_config_page_size_applies_to_list() {
    let fx = Fixture::new();
    let config = fx.path().join("site.toml");
    std::fs::write(&config, "[lists]\nposts_page_size = 4\n").unwrap();

    fx.folio()
        .args([
            "--config",
            &config.display().to_string(),
            "list",
            "posts",
            "--catalog",
            &fx.catalog(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 4 of 25 (more available)"));
}
