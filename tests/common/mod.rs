#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;

pub fn notemirror_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notemirror").unwrap();
    cmd.env_remove("NOTEMIRROR_CONFIG");
    cmd.env_remove("NOTEMIRROR_SNAPSHOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
