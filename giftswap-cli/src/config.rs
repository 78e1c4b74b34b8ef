use anyhow::{Context, Result};
use giftswap_core::GameConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_VIDEOS: [&str; 14] = [
    "G2rap7ktp0E",
    "w8cSdNqa0RY",
    "53QjLXhvxA4",
    "xx0j4iTUS4g",
    "7MFm3xEUHg4",
    "hjJr3NKH4Q8",
    "cV7xXIxex98",
    "k6PF9l6MDDo",
    "NDRjVAMoaq0",
    "NMuwoTb_a2Q",
    "c19yEuB1z9w",
    "iYfeGzQBi2k",
    "5aFLzhOUzDE",
    "KfeNeUb4XJk",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub game: GameConfig,
    pub spin_frames: u32,
    pub spin_interval_ms: u64,
    pub reveal_delay_ms: u64,
    pub host_spin_frames: u32,
    pub host_spin_interval_ms: u64,
    pub host_reveal_delay_ms: u64,
    pub videos: Vec<String>,
}

/// Pace of one spin animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub frames: u32,
    pub interval: Duration,
    pub reveal_delay: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            spin_frames: 35,
            spin_interval_ms: 45,
            reveal_delay_ms: 1000,
            host_spin_frames: 25,
            host_spin_interval_ms: 50,
            host_reveal_delay_ms: 800,
            videos: DEFAULT_VIDEOS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl CliConfig {
    /// The host's opening spin runs shorter and slower than the others.
    pub fn spin_timing(&self, host_opening: bool) -> SpinTiming {
        let (frames, interval_ms, reveal_ms) = if host_opening {
            (self.host_spin_frames, self.host_spin_interval_ms, self.host_reveal_delay_ms)
        } else {
            (self.spin_frames, self.spin_interval_ms, self.reveal_delay_ms)
        };

        SpinTiming {
            frames,
            interval: Duration::from_millis(interval_ms),
            reveal_delay: Duration::from_millis(reveal_ms),
        }
    }

    /// `<config dir>/giftswap/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("giftswap").join("config.json"))
    }

    /// Load from `path`, or from the default location when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.game.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
