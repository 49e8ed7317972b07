use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{blog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Run every task in a plan even when one fails (the historical behavior).
    #[serde(default)]
    pub keep_going: bool,
    /// Repository root to run builds in. Defaults to the current directory.
    pub repo_root: Option<String>,
    /// Override for the cargo executable.
    pub cargo: Option<String>,
    /// Override for the npm executable.
    pub npm: Option<String>,
}

impl Config {
    pub fn bob_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".bob"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::bob_dir()?.join("bob.toml"))
    }

    pub fn effective_cargo(&self) -> &str {
        self.cargo.as_deref().unwrap_or("cargo")
    }

    pub fn effective_npm(&self) -> &str {
        self.npm.as_deref().unwrap_or("npm")
    }

    pub fn effective_repo_root(&self) -> Result<PathBuf> {
        match &self.repo_root {
            Some(dir) => Ok(expand_tilde(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        blog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            blog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        blog_debug!(
            "Config loaded: keep_going={}, repo_root={:?}, cargo={:?}, npm={:?}",
            config.keep_going,
            config.repo_root,
            config.cargo,
            config.npm
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let bob_dir = Self::bob_dir()?;
        blog_debug!("Config::save bob_dir={}", bob_dir.display());
        if !bob_dir.exists() {
            fs::create_dir_all(&bob_dir)?;
        }
        self.write_to(&Self::config_path()?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        blog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
