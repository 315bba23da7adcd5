// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.billfold", "Billfold", "billfold"));

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "BILLFOLD_API_URL";

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.to_path_buf())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

/// Base-URL precedence: env var, then config file, then the stock default.
pub fn resolve_api_url(cfg: &Config) -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| cfg.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: config_dir()?.join("config.json"),
        })
    }

    /// Explicit location, used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read config at {}", self.path.display()))?;
        let cfg = serde_json::from_str(&raw)
            .with_context(|| format!("Parse config at {}", self.path.display()))?;
        Ok(cfg)
    }

    pub fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        let raw = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write config at {}", self.path.display()))?;
        Ok(())
    }
}
