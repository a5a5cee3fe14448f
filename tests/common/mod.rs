#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch project directory with an isolated user config location.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path().join("skillmeter.toml"), content).unwrap();
    }

    pub fn command(&self) -> Command {
        let home = self.path().join("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skillmeter"));
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("SKILLMETER_RANGE")
            .env_remove("SKILLMETER_VERBOSITY")
            .env_remove("SKILLMETER_COLOR")
            .env_remove("SKILLMETER_BAR_WIDTH");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse NDJSON stdout into one value per line.
pub fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
