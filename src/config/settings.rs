use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use toml_edit::{DocumentMut, Item, Table};

use crate::session::autoplay::{clamp_speed, step_delay, BASE_STEP_DELAY};
use crate::session::{SessionLimits, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::ui::action::{parse_action, Action};
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub array: ArrayConfig,
    /// Target used when none is given on the command line
    pub default_target: i64,
    pub playback: PlaybackConfig,
    pub keybindings: KeybindingConfig,
}

/// Array generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    pub size: usize,
    pub min_value: i64,
    pub max_value: i64,
    /// Force generated arrays to contain the target
    pub guarantee_target: bool,
}

/// Auto-play settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Speed multiplier, 0.5 to 2.0
    pub speed: f64,
    /// Delay between frames at speed 1.0
    pub base_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            array: ArrayConfig {
                size: 20,
                min_value: 1,
                max_value: 100,
                guarantee_target: true,
            },
            default_target: 50,
            playback: PlaybackConfig {
                speed: 1.0,
                base_delay: BASE_STEP_DELAY,
            },
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlArrayConfig {
    pub size: Option<usize>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub guarantee_target: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSearchConfig {
    pub default_target: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlaybackConfig {
    pub speed: Option<f64>,
    pub base_delay_ms: Option<u64>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub array: Option<TomlArrayConfig>,
    pub search: Option<TomlSearchConfig>,
    pub playback: Option<TomlPlaybackConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert `[keys]` and its `[keys.<context>]` subtables.
    ///
    /// Unknown actions and unparsable keys are skipped with a warning.
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (name, value) in &self.global {
            match value {
                toml::Value::String(key) => {
                    if let Some((combo, action)) = parse_binding(name, key) {
                        config.global.insert(combo, action);
                    }
                }
                toml::Value::Table(table) => {
                    let Some(context) = KeyContext::all()
                        .iter()
                        .copied()
                        .find(|ctx| ctx.section_name() == name.as_str())
                    else {
                        tracing::warn!(section = %name, "Unknown keybinding section");
                        continue;
                    };
                    let bindings = config.context.entry(context).or_default();
                    for (action_name, key) in table {
                        let Some(key) = key.as_str() else {
                            continue;
                        };
                        if let Some((combo, action)) = parse_binding(action_name, key) {
                            bindings.insert(combo, action);
                        }
                    }
                }
                _ => {
                    tracing::warn!(action = %name, "Keybinding must be a string");
                }
            }
        }

        config
    }
}

fn parse_binding(action_name: &str, key: &str) -> Option<(KeyCombo, Action)> {
    let action = parse_action(action_name).or_else(|| {
        tracing::warn!(action = %action_name, "Unknown action in keybinding config");
        None
    })?;
    match parse_key_notation(key) {
        Ok(combo) => Some((combo, action)),
        Err(e) => {
            tracing::warn!(action = %action_name, key = %key, error = %e, "Invalid key notation");
            None
        }
    }
}

impl Config {
    /// Load configuration from the default path, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`. Missing or malformed files fall back
    /// to defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file loaded");
                return Config::default();
            }
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => Config::default().merged(toml_config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config");
                Config::default()
            }
        }
    }

    /// Apply a parsed config file on top of `self`.
    pub fn merged(mut self, toml_config: TomlConfig) -> Self {
        if let Some(array) = toml_config.array {
            if let Some(size) = array.size {
                self.array.size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
            }
            if let Some(min_value) = array.min_value {
                self.array.min_value = min_value;
            }
            if let Some(max_value) = array.max_value {
                self.array.max_value = max_value;
            }
            if let Some(guarantee) = array.guarantee_target {
                self.array.guarantee_target = guarantee;
            }
        }

        if self.array.min_value > self.array.max_value {
            tracing::warn!(
                min_value = self.array.min_value,
                max_value = self.array.max_value,
                "Invalid value range in config, using defaults"
            );
            let defaults = Config::default().array;
            self.array.min_value = defaults.min_value;
            self.array.max_value = defaults.max_value;
        }

        if let Some(target) = toml_config.search.and_then(|s| s.default_target) {
            self.default_target = target;
        }

        if let Some(playback) = toml_config.playback {
            if let Some(speed) = playback.speed {
                self.playback.speed = clamp_speed(speed);
            }
            if let Some(ms) = playback.base_delay_ms {
                self.playback.base_delay = Duration::from_millis(ms);
            }
        }

        if let Some(keys) = toml_config.keys {
            let user_bindings = keys.to_keybinding_config();
            self.keybindings.merge(user_bindings);
        }

        self
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_array_size(mut self, size: usize) -> Self {
        self.array.size = size;
        self
    }

    pub fn with_default_target(mut self, target: i64) -> Self {
        self.default_target = target;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.playback.speed = clamp_speed(speed);
        self
    }

    pub fn with_guarantee_target(mut self, guarantee: bool) -> Self {
        self.array.guarantee_target = guarantee;
        self
    }

    /// Session limits derived from the array settings.
    pub fn limits(&self) -> SessionLimits {
        SessionLimits {
            min_value: self.array.min_value,
            max_value: self.array.max_value,
            min_size: MIN_ARRAY_SIZE,
            max_size: MAX_ARRAY_SIZE,
        }
    }

    /// Delay between auto-play frames at the configured speed.
    pub fn step_delay(&self) -> Duration {
        step_delay(self.playback.base_delay, self.playback.speed)
    }
}

/// Persist the auto-play speed to `path`.
///
/// Updates `[playback].speed` in place, preserving comments and every other
/// setting in the file.
pub fn save_playback_speed(path: &Path, speed: f64) -> std::io::Result<()> {
    let contents = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("playback") {
        doc["playback"] = Item::Table(Table::new());
    }
    doc["playback"]["speed"] = toml_edit::value(clamp_speed(speed));

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, doc.to_string())?;
    Ok(())
}
