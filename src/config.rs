//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::clock::{FaceLayout, DEFAULT_PALETTE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub tui: TuiConfig,

    /// Start with the three example tasks
    #[serde(default = "default_true")]
    pub seed_example_tasks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            tui: TuiConfig::default(),
            seed_example_tasks: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_size")]
    pub size: f64,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            stroke_width: default_stroke_width(),
            palette: default_palette(),
        }
    }
}

impl ClockConfig {
    pub fn layout(&self) -> FaceLayout {
        FaceLayout {
            size: self.size,
            stroke_width: self.stroke_width,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_true")]
    pub use_12_hour_clock: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            use_12_hour_clock: true,
        }
    }
}

impl TuiConfig {
    /// Tick period, never shorter than 50ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(50))
    }
}

fn default_true() -> bool {
    true
}

fn default_size() -> f64 {
    320.0
}

fn default_stroke_width() -> f64 {
    30.0
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// `~/.config/day-clock`
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    Ok(home.join(".config").join("day-clock"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load the config file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.seed_example_tasks);
        assert_eq!(config.clock.size, 320.0);
        assert_eq!(config.clock.stroke_width, 30.0);
        assert_eq!(config.clock.palette.len(), 6);
        assert_eq!(config.tui.tick_interval_ms, 1000);
        assert!(config.tui.use_12_hour_clock);
    }

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.seed_example_tasks);
        assert_eq!(config.clock.palette[0], "#818cf8");
    }

    #[test]
    fn test_config_nested_sections() {
        let toml = r##"
            seed_example_tasks = false

            [clock]
            size = 400.0
            palette = ["#000000"]

            [tui]
            use_12_hour_clock = false
        "##;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.seed_example_tasks);
        assert_eq!(config.clock.size, 400.0);
        assert_eq!(config.clock.stroke_width, 30.0);
        assert_eq!(config.clock.palette, vec!["#000000"]);
        assert!(!config.tui.use_12_hour_clock);
        assert_eq!(config.tui.tick_interval_ms, 1000);
    }

    #[test]
    fn test_layout_from_clock_config() {
        let clock = ClockConfig {
            size: 200.0,
            stroke_width: 20.0,
            palette: Vec::new(),
        };
        let layout = clock.layout();
        assert_eq!(layout.center(), 100.0);
        assert_eq!(layout.radius(), 80.0);
    }

    #[test]
    fn test_tick_interval_floor() {
        let tui = TuiConfig {
            tick_interval_ms: 1,
            use_12_hour_clock: true,
        };
        assert_eq!(tui.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.seed_example_tasks = false;
        config.tui.tick_interval_ms = 250;

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.seed_example_tasks, deserialized.seed_example_tasks);
        assert_eq!(
            config.tui.tick_interval_ms,
            deserialized.tui.tick_interval_ms
        );
        assert_eq!(config.clock.palette, deserialized.clock.palette);
    }
}
