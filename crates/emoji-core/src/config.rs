//! Typed emoji chat configuration, parsed from TOML.
//!
//! - `parse_config_toml(content)` parses and type-checks a config
//! - `validate()` reports whether the keys the engine needs are present
//! - Default values are embedded via `include_str!("default_config.toml")`

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

/// Returns the embedded default config TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("config is missing 'fix-emoji-coloring' or the [shortcuts] table")]
    Invalid,
}

/// Shortcut strings that expand to one emoji name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutGroup {
    pub name: String,
    pub shortcuts: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    fix_emoji_coloring: Option<bool>,
    #[serde(default)]
    emojis_on_signs: bool,
    #[serde(default)]
    emojis_in_commands: bool,
    #[serde(default)]
    only_command_list: bool,
    #[serde(default = "default_command_list")]
    command_list: Vec<String>,
    shortcuts: Option<toml::Table>,
}

fn default_command_list() -> Vec<String> {
    vec!["/msg".to_string(), "/tell".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiConfig {
    /// Reset emoji color in chat so colored chat does not tint the glyph.
    pub fix_emoji_coloring: Option<bool>,
    pub emojis_on_signs: bool,
    pub emojis_in_commands: bool,
    /// Only rewrite commands whose first word is in `command_list`.
    pub only_command_list: bool,
    pub command_list: Vec<String>,
    /// Shortcut groups in file order.
    pub shortcuts: Option<Vec<ShortcutGroup>>,
}

/// A config with nothing set. It does not pass [`EmojiConfig::validate`].
impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            fix_emoji_coloring: None,
            emojis_on_signs: false,
            emojis_in_commands: false,
            only_command_list: false,
            command_list: default_command_list(),
            shortcuts: None,
        }
    }
}

impl EmojiConfig {
    /// The embedded default config.
    pub fn embedded() -> Result<Self, ConfigError> {
        parse_config_toml(DEFAULT_CONFIG_TOML)
    }

    /// True iff both the coloring flag and the shortcuts table are present.
    pub fn validate(&self) -> bool {
        self.fix_emoji_coloring.is_some() && self.shortcuts.is_some()
    }

    pub fn fix_coloring(&self) -> bool {
        self.fix_emoji_coloring.unwrap_or(false)
    }

    /// Whether a command line passes the command allow-list.
    ///
    /// The first word is lower-cased before comparison.
    pub fn allows_command(&self, command: &str) -> bool {
        if !self.only_command_list {
            return true;
        }
        let label = command
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        self.command_list.iter().any(|c| *c == label)
    }
}

pub fn parse_config_toml(toml_str: &str) -> Result<EmojiConfig, ConfigError> {
    let raw: RawConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let shortcuts = raw.shortcuts.map(parse_shortcuts);
    Ok(EmojiConfig {
        fix_emoji_coloring: raw.fix_emoji_coloring,
        emojis_on_signs: raw.emojis_on_signs,
        emojis_in_commands: raw.emojis_in_commands,
        only_command_list: raw.only_command_list,
        command_list: raw.command_list,
        shortcuts,
    })
}

/// Read and parse a config file.
pub fn load_config_file(path: &Path) -> Result<EmojiConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_config_toml(&content)
}

/// Groups that are not a list contribute no shortcuts; the rest still load.
fn parse_shortcuts(table: toml::Table) -> Vec<ShortcutGroup> {
    let mut groups = Vec::with_capacity(table.len());
    for (name, value) in table {
        let toml::Value::Array(items) = value else {
            warn!(name = %name, value = %value, "shortcut group is not a list, ignored");
            continue;
        };
        let mut shortcuts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                toml::Value::String(s) => shortcuts.push(s),
                other => warn!(name = %name, value = %other, "non-string shortcut ignored"),
            }
        }
        groups.push(ShortcutGroup { name, shortcuts });
    }
    groups
}
