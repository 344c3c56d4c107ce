//! Shared helpers for weekmenu integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use weekmenu::test_utils::TestLibrary;

/// A `weekmenu` command isolated from the user's config file and environment.
pub fn weekmenu_command(library: &TestLibrary) -> Command {
    let mut cmd = Command::cargo_bin("weekmenu").unwrap();
    cmd.env("WEEKMENU_CONFIG", library.root().join("no-such-config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Menu lines (`N: name`) from `weekmenu pick` stdout.
pub fn menu_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip_while(|line| !line.starts_with("Your weekly menu:"))
        .skip(1)
        .map(str::to_string)
        .collect()
}
