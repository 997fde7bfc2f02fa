//! Init command - write an annotated newsgrade.toml

use anyhow::{Context, Result};
use console::style;
use newsgrade::config::CONFIG_TEMPLATE;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "newsgrade.toml";

/// Run the init command
pub(super) fn run(path: &Path, force: bool) -> Result<()> {
    let written = write_config(path, force)?;
    match written {
        Some(config_path) => {
            println!(
                "{} Created {}",
                style("✓").green(),
                style(config_path.display()).cyan()
            );
            println!(
                "\n{} Edit weights and thresholds, then run {}",
                style("→").dim(),
                style("newsgrade analyze <FILE>").yellow()
            );
        }
        None => {
            println!(
                "{} {} already exists (use {} to overwrite)",
                style("!").yellow(),
                style(path.join(CONFIG_FILE).display()).cyan(),
                style("--force").yellow()
            );
        }
    }
    Ok(())
}

/// Returns the written path, or `None` if a config exists and `force` is off
fn write_config(dir: &Path, force: bool) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        return Ok(None);
    }
    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsgrade::config::load_config;

    #[test]
    fn test_init_writes_loadable_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), false).unwrap().expect("written");
        assert!(path.ends_with(CONFIG_FILE));

        let config = load_config(Some(&path), dir.path()).unwrap();
        assert_eq!(config.defaults.format.as_deref(), Some("text"));
    }

    #[test]
    fn test_init_does_not_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(dir.path(), false).unwrap().is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        assert!(write_config(dir.path(), true).unwrap().is_some());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[weights]"));
    }

    #[test]
    fn test_init_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_config(&dir.path().join("nope"), false).is_err());
    }
}
