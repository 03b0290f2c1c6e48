//! Maze configuration.

use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    21
}

fn default_height() -> u32 {
    15
}

fn default_seed() -> u64 {
    0x5741_5252
}

/// Dimensions and seed for a maze session.
///
/// Frontends typically deserialize this from a JSON config file; missing
/// fields fall back to the 21x15 default board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl MazeConfig {
    /// Dimensions are clamped to at least 1x1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            seed: default_seed(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(default_width(), default_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_clamped() {
        let cfg = MazeConfig::new(0, 0);
        assert_eq!((cfg.width, cfg.height), (1, 1));
    }

    #[test]
    fn missing_json_fields_use_defaults() {
        let cfg: MazeConfig = serde_json::from_str("{\"seed\": 7}").unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.seed), (21, 15, 7));

        let cfg: MazeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!((cfg.width, cfg.height), (21, 15));
    }

    #[test]
    fn with_seed_overrides() {
        let cfg = MazeConfig::default().with_seed(99);
        assert_eq!(cfg.seed, 99);
    }
}
