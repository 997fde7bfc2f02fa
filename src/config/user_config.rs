//! User-level configuration location
//!
//! `~/.config/newsgrade/config.toml` is consulted when no config file is
//! found in the working directory.

use std::path::PathBuf;

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("newsgrade").join("config.toml"))
}
