//! Integration tests for cache-purge

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    /// Binary with every input-related variable cleared
    fn cache_purge() -> Command {
        let mut cmd = cargo_bin_cmd!("cache-purge");
        for var in [
            "INPUT_GITHUB-TOKEN",
            "INPUT_REF",
            "INPUT_FAIL-ON-WARNING",
            "GITHUB_REPOSITORY",
            "GITHUB_API_URL",
            "GITHUB_ACTIONS",
            "RUNNER_DEBUG",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    #[test]
    fn help_displays() {
        cache_purge()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Delete GitHub Actions caches"));
    }

    #[test]
    fn version_displays() {
        cache_purge()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cache-purge"));
    }

    #[test]
    fn missing_ref_fails() {
        cache_purge()
            .args(["--github-token", "t", "--repository", "o/r"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Input required and not supplied: ref",
            ));
    }

    #[test]
    fn missing_repository_shows_hint() {
        cache_purge()
            .args(["--github-token", "t", "--ref", "main"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("GITHUB_REPOSITORY"));
    }

    #[test]
    fn mapping_ref_input_fails() {
        cache_purge()
            .env("INPUT_GITHUB-TOKEN", "t")
            .env("INPUT_REF", "{ not: valid }")
            .env("GITHUB_REPOSITORY", "o/r")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "ref input must be a string or array",
            ));
    }

    #[test]
    fn invalid_fail_on_warning_is_rejected() {
        cache_purge()
            .args(["--ref", "main", "--fail-on-warning", "sometimes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid boolean"));
    }
}

mod run_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use httpmock::Method::{DELETE, GET};
    use httpmock::MockServer;
    use predicates::prelude::*;
    use serde_json::json;
    use std::net::TcpListener;

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn cache_purge(server: &MockServer) -> Command {
        let mut cmd = cargo_bin_cmd!("cache-purge");
        cmd.env_remove("INPUT_FAIL-ON-WARNING")
            .env_remove("RUNNER_DEBUG")
            .env_remove("RUST_LOG")
            .env("INPUT_GITHUB-TOKEN", "secret-token")
            .env("GITHUB_REPOSITORY", "test-owner/test-repo")
            .env("GITHUB_API_URL", server.base_url());
        cmd
    }

    fn mock_list(server: &MockServer, git_ref: &str, caches: serde_json::Value) {
        server.mock(|when, then| {
            when.method(GET)
                .path("/repos/test-owner/test-repo/actions/caches")
                .query_param("ref", git_ref);
            then.status(200)
                .json_body(json!({ "total_count": 1, "actions_caches": caches }));
        });
    }

    #[test]
    fn deletes_caches_of_every_ref() {
        if !can_bind_localhost() {
            eprintln!("Skipping httpmock tests: cannot bind to localhost");
            return;
        }

        let server = MockServer::start();
        mock_list(&server, "refs/heads/feat-1", json!([{ "id": 1, "size_in_bytes": 100 }]));
        mock_list(&server, "refs/heads/feat-2", json!([{ "id": 2, "size_in_bytes": 200 }]));
        let delete_first = server.mock(|when, then| {
            when.method(DELETE)
                .path("/repos/test-owner/test-repo/actions/caches/1");
            then.status(204);
        });
        let delete_second = server.mock(|when, then| {
            when.method(DELETE)
                .path("/repos/test-owner/test-repo/actions/caches/2");
            then.status(204);
        });

        cache_purge(&server)
            .env_remove("GITHUB_ACTIONS")
            .env("INPUT_REF", "[refs/heads/feat-1, refs/heads/feat-2]")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "📦 1 cache found for ref \"refs/heads/feat-1\"",
            ))
            .stdout(predicate::str::contains(
                "✅ Deleted 2 caches with a total size of 300 B.",
            ));

        delete_first.assert();
        delete_second.assert();
    }

    #[test]
    fn failed_deletion_escalates_in_actions() {
        if !can_bind_localhost() {
            eprintln!("Skipping httpmock tests: cannot bind to localhost");
            return;
        }

        let server = MockServer::start();
        mock_list(&server, "refs/heads/main", json!([{ "id": 1, "size_in_bytes": 100 }]));
        server.mock(|when, then| {
            when.method(DELETE)
                .path("/repos/test-owner/test-repo/actions/caches/1");
            then.status(404).json_body(json!({ "message": "Not Found" }));
        });

        cache_purge(&server)
            .env("GITHUB_ACTIONS", "true")
            .env("INPUT_REF", "refs/heads/main")
            .env("INPUT_FAIL-ON-WARNING", "true")
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "::warning::⚠️ Could not delete cache 1: GitHub API error (404): Not Found",
            ))
            .stdout(predicate::str::contains(
                "::error::⚠️ Action failed due to warning(s).",
            ));
    }

    #[test]
    fn failed_deletion_only_warns_by_default() {
        if !can_bind_localhost() {
            eprintln!("Skipping httpmock tests: cannot bind to localhost");
            return;
        }

        let server = MockServer::start();
        mock_list(&server, "refs/heads/main", json!([{ "id": 1, "size_in_bytes": 100 }]));
        server.mock(|when, then| {
            when.method(DELETE)
                .path("/repos/test-owner/test-repo/actions/caches/1");
            then.status(500);
        });

        cache_purge(&server)
            .env("GITHUB_ACTIONS", "true")
            .env("INPUT_REF", "refs/heads/main")
            .assert()
            .success()
            .stdout(predicate::str::contains("::warning::"))
            .stdout(predicate::str::contains("::error::").not());
    }
}
