//! Common test utilities and helpers
//!
//! - `TestEnv`: temporary directories plus an in-process `TestServer`
//! - `mock_server`: wiremock stand-ins for the collaborative editor
//! - `assertions`: small assertion macros

pub mod assertions;
pub mod mock_server;

use std::path::PathBuf;

use axum_test::TestServer;
use docbridge::backend::server::create_app;
use docbridge::shared::AppConfig;
use tempfile::TempDir;

pub use mock_server::*;

/// Fully wired server over throwaway directories
pub struct TestEnv {
    _root: TempDir,
    pub files_dir: PathBuf,
    pub save_dir: PathBuf,
    pub server: TestServer,
}

impl TestEnv {
    pub async fn new() -> Self {
        Self::builder().build().await
    }

    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Bytes of a persisted document, if it exists
    pub fn saved_file(&self, name: &str) -> Option<Vec<u8>> {
        std::fs::read(self.save_dir.join(name)).ok()
    }

    /// Names in the persisted-documents directory
    pub fn saved_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.save_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub struct TestEnvBuilder {
    alias: String,
    save_failure_status_ok: bool,
    create_files_dir: bool,
    files: Vec<(String, Vec<u8>)>,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            // wiremock listens on 127.0.0.1, so editor URLs using `localhost`
            // must be rewritten onto it
            alias: "127.0.0.1".to_string(),
            save_failure_status_ok: false,
            create_files_dir: true,
            files: Vec::new(),
        }
    }
}

impl TestEnvBuilder {
    pub fn source_file(mut self, name: &str, content: &[u8]) -> Self {
        self.files.push((name.to_string(), content.to_vec()));
        self
    }

    pub fn without_files_dir(mut self) -> Self {
        self.create_files_dir = false;
        self
    }

    pub fn save_failure_status_ok(mut self) -> Self {
        self.save_failure_status_ok = true;
        self
    }

    pub async fn build(self) -> TestEnv {
        let root = tempfile::tempdir().unwrap();
        let files_dir = root.path().join("public").join("files");
        let public_dir = root.path().join("public");
        let plugins_dir = root.path().join("plugins");
        let save_dir = root.path().join("saved");

        std::fs::create_dir_all(&public_dir).unwrap();
        std::fs::create_dir_all(&plugins_dir).unwrap();
        std::fs::write(public_dir.join("editor.html"), "<html>editor</html>").unwrap();
        std::fs::write(plugins_dir.join("hello.js"), "console.log('hello');").unwrap();

        if self.create_files_dir {
            std::fs::create_dir_all(&files_dir).unwrap();
            for (name, content) in &self.files {
                std::fs::write(files_dir.join(name), content).unwrap();
            }
        }

        let config = AppConfig::builder()
            .files_dir(&files_dir)
            .save_dir(&save_dir)
            .public_dir(&public_dir)
            .plugins_dir(&plugins_dir)
            .internal_host_alias(self.alias)
            .fetch_timeout_secs(5)
            .save_failure_status_ok(self.save_failure_status_ok)
            .build()
            .unwrap();

        let app = create_app(config).await.unwrap();
        let server = TestServer::new(app).unwrap();

        TestEnv {
            _root: root,
            files_dir,
            save_dir,
            server,
        }
    }
}
