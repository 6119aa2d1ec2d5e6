#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("proj");
        fs::create_dir_all(&root).expect("create project root");
        let root = root.canonicalize().expect("canonical project root");
        Self { _tmp: tmp, root }
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create header dir");
        fs::write(&path, body).expect("write header");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read header")
    }

    /// Command running inside the project root, so `--root` defaults to it.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("header-guard");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str], expect_code: i32) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(expect_code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn guarded(name: &str, endif_name: &str) -> String {
    format!(
        "#ifndef {name}\n#define {name}\n\nint value();\n\n#endif // {endif_name}\n",
        name = name,
        endif_name = endif_name
    )
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf8 path")
}
