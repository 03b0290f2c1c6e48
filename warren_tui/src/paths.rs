//! Config discovery for the terminal frontend.
//!
//! Precedence: `<config_dir>/warren/config.json`, then the `WARREN_SEED`
//! environment variable, then a clock-derived seed when nothing pinned
//! one.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};
use warren::config::MazeConfig;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Option<Self> {
        dirs::config_dir().map(|base| Self {
            config_dir: base.join("warren"),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

pub fn load_config() -> MazeConfig {
    let from_file = AppPaths::new().and_then(|paths| read_config_file(&paths.config_file()));

    let mut config = match from_file {
        Some(config) => config,
        // No file: fresh layout every launch, like any arcade game.
        None => MazeConfig::default().with_seed(clock_seed()),
    };

    if let Some(seed) = env_seed() {
        config = config.with_seed(seed);
    }
    config
}

fn read_config_file(path: &Path) -> Option<MazeConfig> {
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<MazeConfig>(&text) {
        Ok(config) => {
            info!(path = %path.display(), "loaded maze config");
            Some(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring bad config file");
            None
        }
    }
}

fn env_seed() -> Option<u64> {
    std::env::var("WARREN_SEED").ok()?.trim().parse().ok()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5741_5252)
}
