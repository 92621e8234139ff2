use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{CategoryCatalog, CategoryDefinition};

use crate::state::ensure_tally_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub profile: ProfileSection,
    #[serde(default)]
    pub display: DisplaySection,
    /// Catalog in display order; empty means the built-in catalog
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub user_id: String,
    /// IANA zone used for calendar math on stored UTC timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileSection {
                user_id: "default".to_string(),
                timezone: default_timezone(),
            },
            display: DisplaySection::default(),
            categories: CategoryCatalog::builtin().iter().cloned().collect(),
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        self.profile
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {}", self.profile.timezone))
    }

    pub fn catalog(&self) -> Result<CategoryCatalog> {
        if self.categories.is_empty() {
            return Ok(CategoryCatalog::builtin());
        }
        CategoryCatalog::new(self.categories.clone()).context("config [[categories]]")
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tally_home()?.join("config.toml"))
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn save_config_to(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write the default config unless one already exists.
/// Returns whether a file was written.
pub fn init_config_at(p: &Path) -> Result<bool> {
    if p.exists() {
        return Ok(false);
    }
    save_config_to(p, &Config::default())?;
    Ok(true)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if init_config_at(&p)? {
        println!("Wrote {}", p.display());
    } else {
        println!("Config already exists: {}", p.display());
    }
    Ok(())
}
