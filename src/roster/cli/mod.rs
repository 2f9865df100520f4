//! # Shell Layer
//!
//! The interactive client for the roster library and the **only** place that
//! reads stdin, writes stdout, or reads process arguments.
//!
//! ## Structure
//!
//! - `setup`: command-line flags (clap)
//! - `prompt`: line-based prompts, numeric re-prompting, `cancel`
//! - `shell`: the menu loop and the console `DeleteResolver`
//! - `render`: menu, record lines, and leveled messages (colored)
//!
//! Settings resolve in priority order: flags, then `config.json` in the OS
//! config directory, then built-in defaults.

mod prompt;
mod render;
mod setup;
mod shell;

use clap::Parser;
use directories::ProjectDirs;
use prompt::Prompter;
use roster::api::{LoadPolicy, RosterApi};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::store::fs::FileStore;
use setup::Cli;
use shell::Shell;
use std::io;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config();
    let policy = if cli.strict {
        LoadPolicy::Strict
    } else {
        config.load_policy()
    };
    let startup_file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.default_file));

    let api = RosterApi::new(FileStore::new()).with_load_policy(policy);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    Shell::new(api, prompter).run(&startup_file)
}

/// A missing or unreadable config silently falls back to defaults.
fn load_config() -> RosterConfig {
    ProjectDirs::from("com", "roster", "roster")
        .and_then(|dirs| RosterConfig::load(dirs.config_dir()).ok())
        .unwrap_or_default()
}
