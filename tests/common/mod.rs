#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME plus a fixture Crafty layout: `<root>/app/config`.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub workdir: PathBuf,
    pub config_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let workdir = tmp.path().join("crafty");
        let config_dir = workdir.join("app/config");
        fs::create_dir_all(&config_dir).expect("create config dir");

        Self {
            _tmp: tmp,
            home,
            workdir,
            config_dir,
        }
    }

    pub fn write_version(&self, contents: &str) -> PathBuf {
        let path = self.version_path();
        fs::write(&path, contents).expect("write version.json");
        path
    }

    pub fn version_path(&self) -> PathBuf {
        self.config_dir.join("version.json")
    }

    /// Binary pointed at the fixture: probe `version.json`, list the workdir
    /// and the config dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("crafty-debug");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("CRAFTY_DEBUG_LOG")
            .current_dir(&self.workdir)
            .args(["--config-file", path_str(&self.version_path())])
            .args(["--extra-dir", path_str(&self.config_dir)]);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("fixture path utf8")
}
