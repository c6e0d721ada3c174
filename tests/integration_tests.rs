use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive search box with server-backed suggestions",
        ));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("siq"));
}

#[test]
fn test_cli_requires_endpoint_argument() {
    cargo_bin_cmd!()
        .assert()
        .failure()
        .stderr(predicate::str::contains("ENDPOINT"));
}

#[test]
fn test_cli_rejects_invalid_endpoint() {
    cargo_bin_cmd!()
        .arg("not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid suggestion endpoint"));
}

#[test]
fn test_cli_rejects_non_http_scheme() {
    cargo_bin_cmd!()
        .arg("ftp://example.org")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only http and https"));
}
