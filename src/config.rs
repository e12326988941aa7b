use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::log::log_level::ParseLevelError;

/// Section read by
/// [`LoggerConfiguration::from_config`](crate::log::logger_configuration::LoggerConfiguration::from_config).
pub const LOGGING_SECTION: &str = "Logging";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no sink registered under the name {0:?}")]
    UnknownSink(String),

    #[error("invalid level expression for sink {sink:?}: {source}")]
    InvalidLevel {
        sink: String,
        #[source]
        source: ParseLevelError,
    },
}

/// Minimal ini-style configuration.
///
/// ```text
/// # comment
/// app = "demo"
///
/// [Logging]
/// console = "Warn | Error"
/// audit   = Event
/// ```
///
/// Keys before the first `[section]` header are globals. Values may be quoted.
/// Section entries are kept sorted by key.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Lines that are neither headers nor `key = value`
    /// pairs are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::empty();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_string();
                config.sections.entry(name.clone()).or_default();
                current_section = Some(name);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        config.globals.insert(key, value);
                    }
                    Some(sec) => {
                        config
                            .sections
                            .entry(sec.clone())
                            .or_default()
                            .insert(key, value);
                    }
                }
            }
        }
        config
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Key/value pairs of `section` in key order. Empty if the section is absent.
    pub fn section(&self, section: &str) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|sec| sec.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
