//! Simulation configuration stored in `life.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use super::life106::{DEFAULT_HEADER, FormatOptions, HeaderPolicy};
use super::write_atomic;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "life.toml";

/// Simulation configuration (TOML).
///
/// Missing fields default to the classic Life 1.06 pipeline: ten generations,
/// header required on input and written on output, sorted cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LifeConfig {
    /// Number of generations to simulate.
    pub generations: u32,

    /// Header token expected on input and written on output.
    pub header: String,

    /// Reject input whose first line is not `header`.
    pub require_header: bool,

    /// Write `header` before the output cells.
    pub write_header: bool,

    /// Sort output cells by `(x, y)`.
    pub sort_output: bool,

    /// Write a `Result of N generations:` line before the output.
    pub print_banner: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            header: DEFAULT_HEADER.to_string(),
            require_header: true,
            write_header: true,
            sort_output: true,
            print_banner: false,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.header.trim().is_empty() {
            return Err(anyhow!("header must be non-empty"));
        }
        if !self.header.starts_with('#') {
            return Err(anyhow!("header must start with '#', got {:?}", self.header));
        }
        if self.header.contains(['\n', '\r']) {
            return Err(anyhow!("header must be a single line"));
        }
        if self.header.trim() != self.header {
            return Err(anyhow!(
                "header must not have surrounding whitespace, got {:?}",
                self.header
            ));
        }
        Ok(())
    }

    pub fn header_policy(&self) -> HeaderPolicy {
        if self.require_header {
            HeaderPolicy::Required
        } else {
            HeaderPolicy::Optional
        }
    }

    pub fn format_options(&self) -> FormatOptions<'_> {
        FormatOptions {
            header: self.write_header.then_some(self.header.as_str()),
            sort: self.sort_output,
            banner_generations: self.print_banner.then_some(self.generations),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LifeConfig::default()`.
pub fn load_config(path: &Path) -> Result<LifeConfig> {
    if !path.exists() {
        let cfg = LifeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LifeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LifeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, buf.as_bytes())
}
