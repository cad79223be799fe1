//! Shared testing utilities for foyer CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PERSONNEL_BODY: &str = r#"{"data":[
    {"id":"p1","firstName":"Ana","lastName":"Silva","poste":"Cuisine"},
    {"id":"p2","firstName":"Jean","lastName":"Martin","poste":"Veilleur"}
]}"#;

/// Testing harness providing an isolated working directory and configuration.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose `foyer.toml` points at `api_url`.
    pub fn with_backend(api_url: &str) -> Self {
        let ctx = Self::new();
        ctx.write_config(&format!(
            r#"[backend]
api_url = "{}"
timeout_secs = 5
token_file = "token"

[export]
output_dir = "exports"
"#,
            api_url
        ));
        ctx.write_token("secret");
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("foyer.toml"), content).expect("Failed to write foyer.toml");
    }

    pub fn write_token(&self, token: &str) {
        fs::write(self.work_dir.join("token"), token).expect("Failed to write token file");
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.work_dir.join("exports")
    }

    /// Build a command for invoking the compiled `foyer` binary in the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("foyer").expect("Failed to locate foyer binary");
        cmd.current_dir(&self.work_dir).env_remove("FOYER_API_TOKEN").env_remove("RUST_LOG");
        cmd
    }
}

/// Base API URL of a mock server, shaped like the production default.
pub fn api_url(server: &mockito::Server) -> String {
    format!("{}/api/", server.url())
}
