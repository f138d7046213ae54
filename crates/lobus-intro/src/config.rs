//! Intro configuration, read from the environment.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_MIN_NAME_LENGTH: usize = 3;
const DEFAULT_MAX_NAME_LENGTH: usize = 16;
const DEFAULT_MAX_CHARACTERS: usize = 3;

/// Invalid intro configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable did not hold a positive integer.
    #[error("{key} must be a positive integer, got `{value}`")]
    InvalidNumber {
        /// The environment variable.
        key: &'static str,
        /// The raw value.
        value: String,
    },

    /// The name length bounds are inverted.
    #[error("LOBUS_MIN_NAME_LENGTH ({min}) exceeds LOBUS_MAX_NAME_LENGTH ({max})")]
    NameBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Settings for the intro flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroConfig {
    /// Shortest accepted character name.
    pub min_name_length: usize,
    /// Longest accepted character name.
    pub max_name_length: usize,
    /// Living characters an account may hold.
    pub max_characters: usize,
    /// Room new characters start in.
    pub starting_room: Option<String>,
    /// File shown to a participant on connect.
    pub motd_path: Option<PathBuf>,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_characters: DEFAULT_MAX_CHARACTERS,
            starting_room: None,
            motd_path: None,
        }
    }
}

impl IntroConfig {
    /// Reads `LOBUS_MIN_NAME_LENGTH`, `LOBUS_MAX_NAME_LENGTH`,
    /// `LOBUS_MAX_CHARACTERS`, `LOBUS_STARTING_ROOM` and `LOBUS_MOTD_PATH`,
    /// falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable is malformed or the name
    /// bounds are inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`IntroConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// See [`IntroConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &'static str, default: usize| -> Result<usize, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or(ConfigError::InvalidNumber { key, value: raw }),
            }
        };

        let min_name_length = number("LOBUS_MIN_NAME_LENGTH", DEFAULT_MIN_NAME_LENGTH)?;
        let max_name_length = number("LOBUS_MAX_NAME_LENGTH", DEFAULT_MAX_NAME_LENGTH)?;
        if min_name_length > max_name_length {
            return Err(ConfigError::NameBounds {
                min: min_name_length,
                max: max_name_length,
            });
        }

        Ok(Self {
            min_name_length,
            max_name_length,
            max_characters: number("LOBUS_MAX_CHARACTERS", DEFAULT_MAX_CHARACTERS)?,
            starting_room: lookup("LOBUS_STARTING_ROOM").filter(|room| !room.trim().is_empty()),
            motd_path: lookup("LOBUS_MOTD_PATH").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| {
            owned
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_from_lookup_uses_defaults_when_unset() {
        let config = IntroConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, IntroConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_every_variable() {
        // Arrange
        let lookup = lookup_from(&[
            ("LOBUS_MIN_NAME_LENGTH", "2"),
            ("LOBUS_MAX_NAME_LENGTH", "12"),
            ("LOBUS_MAX_CHARACTERS", "5"),
            ("LOBUS_STARTING_ROOM", "limbo:white"),
            ("LOBUS_MOTD_PATH", "resources/motd"),
        ]);

        // Act
        let config = IntroConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.min_name_length, 2);
        assert_eq!(config.max_name_length, 12);
        assert_eq!(config.max_characters, 5);
        assert_eq!(config.starting_room.as_deref(), Some("limbo:white"));
        assert_eq!(config.motd_path, Some(PathBuf::from("resources/motd")));
    }

    #[test]
    fn test_from_lookup_rejects_malformed_numbers() {
        let result = IntroConfig::from_lookup(lookup_from(&[("LOBUS_MAX_CHARACTERS", "many")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                key: "LOBUS_MAX_CHARACTERS",
                value: "many".to_owned(),
            })
        );
    }

    #[test]
    fn test_from_lookup_rejects_inverted_name_bounds() {
        let result = IntroConfig::from_lookup(lookup_from(&[
            ("LOBUS_MIN_NAME_LENGTH", "10"),
            ("LOBUS_MAX_NAME_LENGTH", "4"),
        ]));

        assert_eq!(result, Err(ConfigError::NameBounds { min: 10, max: 4 }));
    }
}
