//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tvguide/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Geometry is validated once here; the layout trusts what it is given.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::{DisplayFlags, Geometry};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub schedule_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub hour_width: Option<u16>,
    pub item_height: Option<u16>,
    pub sidebar_width: Option<u16>,
    pub hours_in_day: Option<u16>,
    pub start_hour: Option<u16>,
    pub overscan: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub rtl: Option<bool>,
    pub twelve_hour: Option<bool>,
    pub sidebar: Option<bool>,
    pub timeline: Option<bool>,
    pub line: Option<bool>,
}

/// Values taken from the command line. `false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub schedule_file: Option<PathBuf>,
    pub rtl: bool,
    pub twelve_hour: bool,
    pub no_sidebar: bool,
    pub no_timeline: bool,
    pub no_line: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOUR_WIDTH: u16 = 24;
pub const DEFAULT_ITEM_HEIGHT: u16 = 3;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 18;
pub const DEFAULT_HOURS_IN_DAY: u16 = 24;
pub const DEFAULT_START_HOUR: u16 = 0;
pub const DEFAULT_OVERSCAN: u16 = 4;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub schedule_file: Option<PathBuf>,
    pub geometry: Geometry,
    pub flags: DisplayFlags,
    pub overscan: u16,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tvguide/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tvguide").join("config.toml"))
}

/// Load config from `~/.tvguide/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GuideConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GuideConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GuideConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GuideConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GuideConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# TV Guide Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# schedule_file = "~/schedules/today.json"   # Or set TVGUIDE_SCHEDULE env var

# [layout]
# hour_width = 24        # columns per hour
# item_height = 3        # rows per channel
# sidebar_width = 18     # columns for the channel list
# hours_in_day = 24      # hours shown on the timeline (1-24)
# start_hour = 0         # hour of day the guide starts at (0-23)
# overscan = 4           # cells rendered beyond the visible window

# [display]
# rtl = false
# twelve_hour = false
# sidebar = true
# timeline = true
# line = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GuideConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // Schedule: CLI → env → config → built-in sample
    let schedule_file = cli
        .schedule_file
        .clone()
        .or_else(|| std::env::var("TVGUIDE_SCHEDULE").ok().map(PathBuf::from))
        .or_else(|| config.general.schedule_file.as_ref().map(PathBuf::from));

    let layout = &config.layout;
    let hour_width = layout.hour_width.unwrap_or(DEFAULT_HOUR_WIDTH);
    let item_height = layout.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT);
    let hours_in_day = layout.hours_in_day.unwrap_or(DEFAULT_HOURS_IN_DAY);
    let start_hour = layout.start_hour.unwrap_or(DEFAULT_START_HOUR);

    if hour_width == 0 {
        return Err(ConfigError::Invalid("hour_width must be positive".to_string()));
    }
    if item_height == 0 {
        return Err(ConfigError::Invalid("item_height must be positive".to_string()));
    }
    if !(1..=24).contains(&hours_in_day) {
        return Err(ConfigError::Invalid(format!(
            "hours_in_day must be between 1 and 24, got {hours_in_day}"
        )));
    }
    if start_hour >= 24 {
        return Err(ConfigError::Invalid(format!(
            "start_hour must be below 24, got {start_hour}"
        )));
    }
    if hour_width.checked_mul(hours_in_day).is_none() {
        return Err(ConfigError::Invalid(format!(
            "hour_width {hour_width} x hours_in_day {hours_in_day} exceeds {} columns",
            u16::MAX
        )));
    }

    let geometry = Geometry::new(
        hour_width,
        hours_in_day,
        start_hour,
        layout.sidebar_width.unwrap_or(DEFAULT_SIDEBAR_WIDTH),
        item_height,
    );

    // Display toggles: a CLI flag only ever flips away from the default
    let display = &config.display;
    let defaults = DisplayFlags::default();
    let flags = DisplayFlags {
        is_rtl: cli.rtl || display.rtl.unwrap_or(defaults.is_rtl),
        is_base_time_format: cli.twelve_hour
            || display.twelve_hour.unwrap_or(defaults.is_base_time_format),
        is_sidebar: !cli.no_sidebar && display.sidebar.unwrap_or(defaults.is_sidebar),
        is_timeline: !cli.no_timeline && display.timeline.unwrap_or(defaults.is_timeline),
        is_line: !cli.no_line && display.line.unwrap_or(defaults.is_line),
    };

    Ok(ResolvedConfig {
        schedule_file,
        geometry,
        flags,
        overscan: layout.overscan.unwrap_or(DEFAULT_OVERSCAN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GuideConfig::default();
        assert!(config.general.schedule_file.is_none());
        assert!(config.layout.hour_width.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&GuideConfig::default(), &CliOverrides::default()).unwrap();
        assert_eq!(resolved.geometry.hour_width, DEFAULT_HOUR_WIDTH);
        assert_eq!(resolved.geometry.item_height, DEFAULT_ITEM_HEIGHT);
        assert_eq!(
            resolved.geometry.day_width,
            DEFAULT_HOUR_WIDTH * DEFAULT_HOURS_IN_DAY
        );
        assert_eq!(resolved.flags, DisplayFlags::default());
        assert_eq!(resolved.overscan, DEFAULT_OVERSCAN);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GuideConfig {
            layout: LayoutConfig {
                hour_width: Some(12),
                item_height: Some(2),
                sidebar_width: Some(10),
                hours_in_day: Some(12),
                start_hour: Some(6),
                overscan: Some(0),
            },
            display: DisplayConfig {
                rtl: Some(true),
                twelve_hour: Some(true),
                sidebar: Some(false),
                timeline: None,
                line: Some(false),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.geometry, Geometry::new(12, 12, 6, 10, 2));
        assert!(resolved.flags.is_rtl);
        assert!(resolved.flags.is_base_time_format);
        assert!(!resolved.flags.is_sidebar);
        assert!(resolved.flags.is_timeline);
        assert!(!resolved.flags.is_line);
        assert_eq!(resolved.overscan, 0);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = GuideConfig {
            general: GeneralConfig {
                schedule_file: Some("from-config.json".to_string()),
            },
            display: DisplayConfig {
                timeline: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            schedule_file: Some(PathBuf::from("from-cli.json")),
            no_timeline: true,
            rtl: true,
            ..Default::default()
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.schedule_file, Some(PathBuf::from("from-cli.json")));
        assert!(!resolved.flags.is_timeline);
        assert!(resolved.flags.is_rtl);
    }

    #[test]
    fn test_resolve_rejects_overflowing_day_width() {
        let wide_hours = GuideConfig {
            layout: LayoutConfig {
                hour_width: Some(3000),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve(&wide_hours, &CliOverrides::default()),
            Err(ConfigError::Invalid(msg)) if msg.contains("hour_width 3000")
        ));

        // 2730 x 24 = 65520 still fits
        let widest = GuideConfig {
            layout: LayoutConfig {
                hour_width: Some(2730),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&widest, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.geometry.day_width, 65520);
    }

    #[test]
    fn test_resolve_rejects_bad_geometry() {
        let zero_width = GuideConfig {
            layout: LayoutConfig {
                hour_width: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve(&zero_width, &CliOverrides::default()),
            Err(ConfigError::Invalid(_))
        ));

        let long_day = GuideConfig {
            layout: LayoutConfig {
                hours_in_day: Some(25),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve(&long_day, &CliOverrides::default()),
            Err(ConfigError::Invalid(_))
        ));

        let late_start = GuideConfig {
            layout: LayoutConfig {
                start_hour: Some(24),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve(&late_start, &CliOverrides::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
schedule_file = "today.json"

[layout]
hour_width = 30
item_height = 4

[display]
twelve_hour = true
line = false
"#;
        let config: GuideConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.schedule_file.as_deref(), Some("today.json"));
        assert_eq!(config.layout.hour_width, Some(30));
        assert_eq!(config.layout.item_height, Some(4));
        assert_eq!(config.display.twelve_hour, Some(true));
        assert_eq!(config.display.line, Some(false));
        assert!(config.display.rtl.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[layout]
sidebar_width = 12
"#;
        let config: GuideConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.sidebar_width, Some(12));
        assert!(config.layout.hour_width.is_none());
        assert!(config.general.schedule_file.is_none());
    }

    #[test]
    fn test_unknown_value_type_is_parse_error() {
        let toml_str = r#"
[layout]
hour_width = "wide"
"#;
        assert!(toml::from_str::<GuideConfig>(toml_str).is_err());
    }
}
