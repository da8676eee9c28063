//! Presentation settings.
//!
//! Navigation behavior is fixed; only presentation (typing speed, warning pause, color) can be
//! tuned. With the `config` feature the values come from
//! `<config_dir>/portfolio-term/config.toml`, otherwise the defaults apply.

use std::io::{self, IsTerminal};
use std::time::Duration;

/// Delay between characters of the typewriter effect
const DEFAULT_TYPEWRITER_DELAY_MS: u64 = 20;
/// How long an invalid-key warning stays on screen before the menu redraws
const DEFAULT_WARNING_PAUSE_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Zero disables the typewriter effect
    pub typewriter_delay: Duration,
    pub warning_pause: Duration,
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            typewriter_delay: Duration::from_millis(DEFAULT_TYPEWRITER_DELAY_MS),
            warning_pause: Duration::from_millis(DEFAULT_WARNING_PAUSE_MS),
            color: true,
            clear_screen: true,
        }
    }
}

impl Settings {
    /// Settings for the current process: defaults, the config file when the feature is on,
    /// and screen clearing only when stdout is a terminal.
    pub fn load() -> Self {
        let settings = Self {
            clear_screen: io::stdout().is_terminal(),
            ..Self::default()
        };

        #[cfg(feature = "config")]
        let settings = match file::config_path().map(|path| file::read(&path)) {
            Some(Ok(Some(config))) => settings.apply(&config),
            Some(Ok(None)) | None => settings,
            Some(Err(err)) => {
                log::warn!("Ignoring configuration file: {}", err);
                settings
            }
        };

        settings
    }

    /// No delays and no screen clearing; output is exactly the frames that were written.
    pub fn immediate() -> Self {
        Self {
            typewriter_delay: Duration::ZERO,
            warning_pause: Duration::ZERO,
            color: false,
            clear_screen: false,
        }
    }

    #[cfg(feature = "config")]
    pub fn apply(self, config: &file::ConfigFile) -> Self {
        Self {
            typewriter_delay: config
                .typewriter_delay_ms
                .map_or(self.typewriter_delay, Duration::from_millis),
            warning_pause: config
                .warning_pause_ms
                .map_or(self.warning_pause, Duration::from_millis),
            color: config.color.unwrap_or(self.color),
            clear_screen: self.clear_screen,
        }
    }
}

#[cfg(feature = "config")]
pub mod file {
    //! Sparse TOML configuration file.

    use crate::error::{PortfolioError, Result};
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    pub struct ConfigFile {
        pub typewriter_delay_ms: Option<u64>,
        pub warning_pause_ms: Option<u64>,
        pub color: Option<bool>,
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio-term").join("config.toml"))
    }

    pub fn parse(contents: &str) -> Result<ConfigFile> {
        toml::from_str(contents).map_err(|err| PortfolioError::config(err.to_string()))
    }

    /// Read the file at `path`; a missing file is not an error.
    pub fn read(path: &Path) -> Result<Option<ConfigFile>> {
        match fs::read_to_string(path) {
            Ok(contents) => parse(&contents).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PortfolioError::config(format!(
                "cannot read {}: {}",
                path.display(),
                err
            ))),
        }
    }
}
