//! Test environment builder for isolated Stackpilot runs.
//!
//! Every run gets an empty environment except for a PATH that starts with a
//! directory of stub `sam`/`aws`/`docker` scripts. Each stub appends its
//! arguments to a shared call log before running its body.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the stackpilot binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin_dir: TempDir,
    /// Whether system directories follow the stub directory on PATH
    system_path: bool,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    /// Every stub invocation so far, one `<tool> <args>` line each
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.call_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn call_log(&self) -> PathBuf {
        self.bin_dir.path().join("calls.log")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = if self.system_path {
            format!("{}:/usr/bin:/bin", self.bin_dir.path().display())
        } else {
            self.bin_dir.path().display().to_string()
        };

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackpilot"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_clear()
            .env("PATH", path)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("AWS_REGION", "ap-southeast-1")
            .env("STUB_LOG", self.call_log())
            .env("STUB_STATE", self.bin_dir.path());

        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute stackpilot");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create directories");
    }
    std::fs::write(path, content).expect("failed to write file");
}

/// Builder for `TestEnv` with a fluent API
pub struct TestEnvBuilder {
    stubs: Vec<(String, String)>,
    project_files: Vec<(String, String)>,
    env: Vec<(String, String)>,
    system_path: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            stubs: Vec::new(),
            project_files: Vec::new(),
            env: Vec::new(),
            system_path: true,
        }
    }

    /// Stub `tool` on PATH; `body` runs after the call is logged
    pub fn with_stub(mut self, tool: &str, body: &str) -> Self {
        self.stubs.push((tool.to_string(), body.to_string()));
        self
    }

    /// Stub that only logs and succeeds
    pub fn with_tool(self, tool: &str) -> Self {
        self.with_stub(tool, "exit 0")
    }

    pub fn with_project_file(mut self, relative: &str, content: &str) -> Self {
        self.project_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// PATH holds the stubs only, so real tools cannot be found
    pub fn stubs_only(mut self) -> Self {
        self.system_path = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("failed to create project temp dir");
        let home_dir = TempDir::new().expect("failed to create home temp dir");
        let bin_dir = TempDir::new().expect("failed to create bin temp dir");

        for (tool, body) in &self.stubs {
            let path = bin_dir.path().join(tool);
            let script = format!(
                "#!/bin/sh\necho \"{} $*\" >> \"$STUB_LOG\"\n{}\n",
                tool, body
            );
            std::fs::write(&path, script).expect("failed to write stub");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("failed to make stub executable");
        }

        for (relative, content) in &self.project_files {
            write_file(&project_root.path().join(relative), content);
        }

        TestEnv {
            project_root,
            home_dir,
            bin_dir,
            system_path: self.system_path,
            env: self.env,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
