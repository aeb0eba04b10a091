//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for the optional tunables file.
//! Every settings block has `#[serde(default)]`, so a file only needs to
//! name the values it changes. A missing file means built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the game looks for its tunables (relative to the working dir / web root)
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    /// WASM fetch through macroquad's `load_string`
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    Fetch(String),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Fetch(e) => write!(f, "Fetch error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl ConfigError {
    /// True when the file simply isn't there (not worth a warning)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Player physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Fixed horizontal position
    pub x: f32,
    /// Sprite edge length (player is square)
    pub size: f32,
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity set on jump (negative = up)
    pub lift: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            x: 50.0,
            size: 40.0,
            gravity: 0.4,
            lift: -8.0,
        }
    }
}

/// Obstacle stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleSettings {
    pub width: f32,
    /// Scroll speed in pixels per reference frame
    pub speed: f32,
    /// Height of the opening
    pub gap: f32,
    /// A new obstacle spawns once the newest one is this far from the right edge
    pub spacing: f32,
    /// Minimum distance between the gap and the top/bottom edge
    pub margin: f32,
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        Self {
            width: 50.0,
            speed: 1.5,
            gap: 200.0,
            spacing: 200.0,
            margin: 50.0,
        }
    }
}

/// Bonus coins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleSettings {
    pub size: f32,
    /// Probability of a coin riding along with each new obstacle
    pub chance: f64,
    /// Horizontal offset from the obstacle's left edge
    pub offset_x: f32,
}

impl Default for CollectibleSettings {
    fn default() -> Self {
        Self {
            size: 20.0,
            chance: 0.5,
            offset_x: 50.0,
        }
    }
}

/// Input and frame timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Touches closer than this to the last accepted one are dropped
    pub touch_debounce_ms: f64,
    /// One delta-time unit (60Hz frame)
    pub reference_frame_ms: f64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            touch_debounce_ms: 100.0,
            reference_frame_ms: 16.67,
        }
    }
}

/// All gameplay tunables
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerSettings,
    pub obstacles: ObstacleSettings,
    pub collectibles: CollectibleSettings,
    pub timing: TimingSettings,
}

fn check_positive(name: &str, v: f32) -> Result<(), String> {
    if !v.is_finite() || v <= 0.0 {
        return Err(format!("{} must be a positive number (got {})", name, v));
    }
    Ok(())
}

fn check_finite(name: &str, v: f32) -> Result<(), String> {
    if !v.is_finite() {
        return Err(format!("{} must be finite (got {})", name, v));
    }
    Ok(())
}

impl GameConfig {
    /// Parse a RON document and validate it
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Read a config file from disk (native)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), String> {
        let p = &self.player;
        check_finite("player.x", p.x)?;
        check_positive("player.size", p.size)?;
        check_finite("player.gravity", p.gravity)?;
        check_finite("player.lift", p.lift)?;

        let o = &self.obstacles;
        check_positive("obstacles.width", o.width)?;
        check_positive("obstacles.speed", o.speed)?;
        check_positive("obstacles.gap", o.gap)?;
        check_positive("obstacles.spacing", o.spacing)?;
        if !o.margin.is_finite() || o.margin < 0.0 {
            return Err(format!("obstacles.margin must be >= 0 (got {})", o.margin));
        }

        let c = &self.collectibles;
        check_positive("collectibles.size", c.size)?;
        check_finite("collectibles.offset_x", c.offset_x)?;
        if !(0.0..=1.0).contains(&c.chance) {
            return Err(format!("collectibles.chance must be within 0..=1 (got {})", c.chance));
        }

        let t = &self.timing;
        if !t.touch_debounce_ms.is_finite() || t.touch_debounce_ms < 0.0 {
            return Err(format!("timing.touch_debounce_ms must be >= 0 (got {})", t.touch_debounce_ms));
        }
        if !t.reference_frame_ms.is_finite() || t.reference_frame_ms <= 0.0 {
            return Err(format!("timing.reference_frame_ms must be > 0 (got {})", t.reference_frame_ms));
        }
        Ok(())
    }
}

/// Load the config for this platform
///
/// Native reads the file synchronously; WASM has to fetch it through
/// macroquad since there is no filesystem.
pub async fn load_config(path: &str) -> Result<GameConfig, ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        GameConfig::from_file(path)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let contents = macroquad::file::load_string(path)
            .await
            .map_err(|e| ConfigError::Fetch(e.to_string()))?;
        GameConfig::from_ron_str(&contents)
    }
}

/// Load the config, falling back to defaults on any failure
pub async fn load_or_default(path: &str) -> GameConfig {
    match load_config(path).await {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) if e.is_not_found() => {
            log::info!("No config at {}, using defaults", path);
            GameConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path, e);
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_round_trip() {
        let config = GameConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let parsed = GameConfig::from_ron_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = GameConfig::from_ron_str("(obstacles: (gap: 150.0))").unwrap();
        assert_eq!(config.obstacles.gap, 150.0);
        assert_eq!(config.obstacles.speed, 1.5);
        assert_eq!(config.player, PlayerSettings::default());
        assert_eq!(config.timing.touch_debounce_ms, 100.0);
    }

    #[test]
    fn test_empty_struct_is_default() {
        let config = GameConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = GameConfig::from_ron_str("(collectibles: (chance: 1.5))").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_zero_gap() {
        let err = GameConfig::from_ron_str("(obstacles: (gap: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        for text in ["(obstacles: (spacing: -10.0))", "(obstacles: (spacing: 0.0))"] {
            let err = GameConfig::from_ron_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{}", text);
        }
    }

    #[test]
    fn test_margin_may_be_zero_but_not_negative() {
        assert!(GameConfig::from_ron_str("(obstacles: (margin: 0.0))").is_ok());
        let err = GameConfig::from_ron_str("(obstacles: (margin: -5.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_zero_reference_frame() {
        let err = GameConfig::from_ron_str("(timing: (reference_frame_ms: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron_str("(player: (size: \"big\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(player: (gravity: 0.5, lift: -9.0))").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player.gravity, 0.5);
        assert_eq!(config.player.lift, -9.0);
        assert_eq!(config.player.size, 40.0);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_PATH);
        assert_eq!(GameConfig::from_file(path).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = GameConfig::from_file(dir.path().join("nope.ron")).unwrap_err();
        assert!(err.is_not_found());
    }
}
