pub mod default_keys;
pub mod keys;
mod settings;

pub use default_keys::default_keybindings;
pub use keys::{parse_key_notation, KeyCombo, KeyContext, KeyParseError, KeybindingConfig};
pub use settings::{
    save_playback_speed, ArrayConfig, Config, PlaybackConfig, TomlConfig, EXAMPLE_CONFIG,
};
