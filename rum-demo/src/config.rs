use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rum::{ContextConfig, Key};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(flatten)]
    pub context: ContextConfig,
    /// Image to show instead of the built-in gradient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    #[serde(default = "default_quit_key")]
    pub quit_key: Key,
    /// Pixels moved per frame while an arrow key is held
    #[serde(default = "default_step")]
    pub step: i32,
    #[serde(default = "default_background")]
    pub background: [u8; 4],
}

fn default_quit_key() -> Key {
    Key::Escape
}

fn default_step() -> i32 {
    4
}

fn default_background() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: ContextConfig::new("Rum Example", 640, 480),
            image: None,
            quit_key: default_quit_key(),
            step: default_step(),
            background: default_background(),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let file = std::fs::File::open(path)?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

pub fn save(config: &Config, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_yaml::to_writer(file, config)?;
    Ok(())
}

/// Load the config at `path`, writing the defaults there first if it does not exist.
pub fn load_or_create(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        save(&config, path)
            .with_context(|| format!("failed to write default config to {}", path.display()))?;
        log::info!("Wrote default config to {}", path.display());
        return Ok(config);
    }

    load(path).with_context(|| format!("failed to read config {}", path.display()))
}
