//! User settings.
//!
//! Defaults for the character groups, filters and word list, stored in
//! `~/.paritysteg/config.toml`. Command line flags override anything set here.
//!
//! ```toml
//! group_a = "EAHISLUMCBKJQ"
//! group_b = "TONRDWFYGPVXZ"
//! ignore_vowels = false
//! ignore_short_words = false
//! per_word = false
//! dictionary = "/usr/share/dict/words"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::text::{CharacterGroups, FilterOptions, DEFAULT_GROUP_A, DEFAULT_GROUP_B};

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Persistent defaults for the command line tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Letters encoding bit 0.
    pub group_a: String,

    /// Letters encoding bit 1.
    pub group_b: String,

    pub ignore_vowels: bool,
    pub ignore_short_words: bool,
    pub per_word: bool,

    /// Word list used for suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group_a: DEFAULT_GROUP_A.to_string(),
            group_b: DEFAULT_GROUP_B.to_string(),
            ignore_vowels: false,
            ignore_short_words: false,
            per_word: false,
            dictionary: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Writes the settings as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Parses the configured groups.
    pub fn groups(&self) -> Result<CharacterGroups> {
        CharacterGroups::new(&self.group_a, &self.group_b)
    }

    pub fn filters(&self) -> FilterOptions {
        FilterOptions {
            ignore_vowels: self.ignore_vowels,
            ignore_short_words: self.ignore_short_words,
            per_word: self.per_word,
        }
    }
}

/// `~/.paritysteg`, if a home directory is known.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".paritysteg"))
}

/// `~/.paritysteg/config.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
