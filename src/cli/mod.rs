//! Command-line interface.
//!
//! With no subcommand the TUI starts. The subcommands cover what is useful
//! without a terminal UI: inspecting or dropping the stored login and
//! generating shell completions.

mod common;

pub use common::*;

use crate::config::Config;
use crate::session::UserStore;
use crate::utils::{expand_path, get_config_path};
use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::info;

/// Study alarm clock that quizzes you awake
#[derive(Parser, Debug)]
#[command(name = "my-alarm", version, about = "Study alarm clock that quizzes you awake", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the account API (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the stored user
    Whoami,
    /// Forget the stored user
    Logout,
    /// Print shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file path, from `--config` (with `~` expanded) or the default
    /// location.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => expand_path(&path.to_string_lossy()),
            None => get_config_path(),
        }
    }

    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        if let Some(url) = &self.api_url {
            info!("API URL overridden from command line: {}", url);
            config.api_base_url = url.clone();
        }
        Ok(config)
    }

    /// Execute a subcommand. Returns `false` when there is none and the TUI
    /// should start instead.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Whoami) => Self::cmd_whoami()?,
            Some(Commands::Logout) => Self::cmd_logout()?,
            Some(Commands::Completions { shell }) => Self::cmd_completions(*shell)?,
            None => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_whoami() -> Result<()> {
        let store = UserStore::default_location();
        match block_on(store.load())? {
            Ok(Some(user)) => {
                println!("{} (group {})", user.username, user.group);
            }
            Ok(None) => print_info("Not logged in"),
            Err(e) => {
                print_error(&format!("Could not read stored user: {}", e));
                std::process::exit(1);
            }
        }
        Ok(())
    }

    fn cmd_logout() -> Result<()> {
        let store = UserStore::default_location();
        block_on(store.clear())?.context("Failed to remove stored user")?;
        print_success("Logged out");
        Ok(())
    }

    fn cmd_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("Could not detect the shell, pass one explicitly");
        };
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_starts_tui() {
        let cli = Cli::parse_from(["my-alarm"]);
        assert!(cli.command.is_none());
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "my-alarm",
            "whoami",
            "--api-url",
            "http://example.test",
            "--config",
            "/tmp/alarm.toml",
        ]);
        assert!(matches!(cli.command, Some(Commands::Whoami)));
        assert_eq!(cli.api_url.as_deref(), Some("http://example.test"));
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/alarm.toml"));
    }

    #[test]
    fn test_api_url_overrides_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cli = Cli::parse_from([
            "my-alarm",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://10.0.0.2:3000",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:3000");
        // the override is not written back
        let saved = Config::load_or_create(&path).unwrap();
        assert_eq!(saved.api_base_url, crate::api::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_completions_shell_argument() {
        let cli = Cli::parse_from(["my-alarm", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: Some(Shell::Zsh)
            })
        ));
    }
}
