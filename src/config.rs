use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::PlayerType;

/// Seat assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerType,
    pub two: PlayerType,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerType::Human,
            two: PlayerType::Human,
        }
    }
}

impl PlayersConfig {
    /// Types in seat order, ready for the controller.
    pub fn types(&self) -> [PlayerType; 2] {
        [self.one, self.two]
    }
}

/// Settings for computer-controlled seats.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Fixed RNG seed; omit for a different game every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frame period in milliseconds. One tick of the game runs per frame.
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { tick_ms: 50 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file. The terminal UI owns stdout/stderr, so without a file
    /// nothing is logged.
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub computer: ComputerConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The flag is `false` when the defaults were used, so the
    /// caller can report it once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.tick_ms == 0 || self.display.tick_ms > 1000 {
            return Err(ConfigError::Validation(
                "display.tick_ms must be in 1..=1000".into(),
            ));
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a log level",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.players.types(), [PlayerType::Human, PlayerType::Human]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
two = "computer"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one, PlayerType::Human);
        assert_eq!(config.players.two, PlayerType::Computer);
        assert_eq!(config.display.tick_ms, 50);
        assert_eq!(config.computer.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.players, default.players);
        assert_eq!(config.display.tick_ms, default.display.tick_ms);
        assert_eq!(config.logging.level, default.logging.level);
    }

    #[test]
    fn test_unknown_player_type_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[players]\none = \"robot\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.display.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_slow_tick() {
        let mut config = AppConfig::default();
        config.display.tick_ms = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, found) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert!(!found);
        assert_eq!(config.display.tick_ms, 50);
    }

    #[test]
    fn test_load_or_default_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "[display]\ntick_ms = 20\n").unwrap();

        let (config, found) = AppConfig::load_or_default(&path).unwrap();
        assert!(found);
        assert_eq!(config.display.tick_ms, 20);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
one = "computer"

[computer]
seed = 99

[logging]
file = "game.log"
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players.one, PlayerType::Computer);
        assert_eq!(config.computer.seed, Some(99));
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.players.two, PlayerType::Human);
        assert_eq!(config.display.tick_ms, 50);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "[display]\ntick_ms = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = AppConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
