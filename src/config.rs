//! Configuration management

use crate::speech::device::MAX_BOARD;
use crate::speech::speaker::{DEFAULT_CLOCK_MHZ, MAX_CLOCK_MHZ, MIN_CLOCK_MHZ};
use crate::translate::DEFAULT_SEPARATOR;
use crate::vocabulary::Vocabulary;
use crate::{Result, RetroSpeakError};
use ini::Ini;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".retrospeak.cfg";

/// Persistent retroSpeak settings
///
/// `[speech]` holds the chip clock, board number, word separator and
/// verbosity; `[vocabulary]` holds user words that replace or extend the
/// built-in vocabulary.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.retrospeak.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the home directory, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| RetroSpeakError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| RetroSpeakError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| RetroSpeakError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.retrospeak.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("clock", DEFAULT_CLOCK_MHZ.to_string())
            .set("board", "0")
            .set("separator", DEFAULT_SEPARATOR)
            .set("verbose", "false");

        ini.with_section(Some("vocabulary"));

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Chip clock in MHz (1.0-5.1)
    pub fn clock(&self) -> f32 {
        let clock = self.get_float("speech", "clock", DEFAULT_CLOCK_MHZ);
        if (MIN_CLOCK_MHZ..=MAX_CLOCK_MHZ).contains(&clock) {
            clock
        } else {
            warn!("Clock {} out of range, using {}", clock, DEFAULT_CLOCK_MHZ);
            DEFAULT_CLOCK_MHZ
        }
    }

    /// Board number (0-3)
    pub fn board(&self) -> u8 {
        self.get_int("speech", "board", 0)
            .try_into()
            .ok()
            .filter(|&b| b <= MAX_BOARD)
            .unwrap_or(0)
    }

    /// Allophone spoken between words
    pub fn separator(&self) -> String {
        self.get_string("speech", "separator", DEFAULT_SEPARATOR)
    }

    /// Print allophones as they are spoken
    pub fn verbose(&self) -> bool {
        self.get_bool("speech", "verbose", false)
    }

    /// Built-in vocabulary with the `[vocabulary]` section merged over it
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocabulary = Vocabulary::builtin();
        if let Some(section) = self.ini.section(Some("vocabulary")) {
            vocabulary.extend(section.iter());
            debug!("Loaded {} user vocabulary words", section.len());
        }
        vocabulary
    }
}
