//! Shared test utilities for the integration tests.
//!
//! `TestEnv` is an isolated config directory in a `TempDir`. It never touches
//! the real `~/.config/my-alarm`: the paths are passed explicitly instead of
//! going through the `MY_ALARM_CONFIG_DIR` override.

use std::path::PathBuf;
use tempfile::TempDir;

use my_alarm::api::{AuthClient, User};
use my_alarm::config::Config;
use my_alarm::session::UserStore;

#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_path: PathBuf,
    pub user_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let user_path = temp_dir.path().join("user.json");
        Self {
            temp_dir,
            config_path,
            user_path,
        }
    }

    pub fn user_store(&self) -> UserStore {
        UserStore::new(&self.user_path)
    }

    /// Config pointing at `api_url` (usually a mockito server).
    pub fn config(&self, api_url: &str) -> Config {
        Config {
            api_base_url: api_url.to_string(),
            ..Config::default()
        }
    }

    pub fn client(&self, api_url: &str) -> AuthClient {
        AuthClient::new(self.config(api_url).api_base_url)
    }

    /// Write raw bytes where the user record lives.
    pub fn write_user_file(&self, content: &str) {
        std::fs::write(&self.user_path, content).expect("Failed to write user file");
    }

    pub fn user_file_exists(&self) -> bool {
        self.user_path.exists()
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }
}

#[allow(dead_code)]
pub fn sample_user() -> User {
    User {
        id: 12,
        username: "ada".to_string(),
        group: 3,
    }
}

#[allow(dead_code)]
pub const SAMPLE_USER_JSON: &str = r#"{"id":12,"username":"ada","group":3}"#;
