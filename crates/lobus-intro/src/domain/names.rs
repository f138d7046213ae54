//! Character name rules.

use thiserror::Error;

use crate::config::IntroConfig;

/// Why a name was refused. The messages are shown to the participant as is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Nothing was entered.
    #[error("Please enter a name.")]
    Empty,

    /// Longer than `max_name_length`.
    #[error("Too long, try a shorter name.")]
    TooLong,

    /// Shorter than `min_name_length`.
    #[error("Too short, try a longer name.")]
    TooShort,

    /// Anything other than ASCII letters.
    #[error("Your name may only contain A-Z without spaces or special characters.")]
    InvalidCharacters,
}

/// Checks `name` against the configured length bounds and the letters-only
/// rule, in that order.
///
/// # Errors
///
/// Returns the first rule the name breaks.
pub fn validate_name(name: &str, config: &IntroConfig) -> Result<(), NameError> {
    let length = name.chars().count();

    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if length > config.max_name_length {
        return Err(NameError::TooLong);
    }
    if length < config.min_name_length {
        return Err(NameError::TooShort);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

/// Upper-cases the first letter, leaving the rest as typed.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_letters_within_bounds() {
        assert_eq!(validate_name("alaric", &IntroConfig::default()), Ok(()));
    }

    #[test]
    fn test_validate_name_reports_first_broken_rule() {
        let config = IntroConfig::default();

        assert_eq!(validate_name("", &config), Err(NameError::Empty));
        assert_eq!(validate_name("al", &config), Err(NameError::TooShort));
        assert_eq!(
            validate_name("abcdefghijklmnopq", &config),
            Err(NameError::TooLong)
        );
        assert_eq!(
            validate_name("al aric", &config),
            Err(NameError::InvalidCharacters)
        );
        assert_eq!(
            validate_name("x1", &config),
            Err(NameError::TooShort)
        );
    }

    #[test]
    fn test_name_error_messages_are_participant_facing() {
        assert_eq!(NameError::Empty.to_string(), "Please enter a name.");
        assert_eq!(
            NameError::InvalidCharacters.to_string(),
            "Your name may only contain A-Z without spaces or special characters."
        );
    }

    #[test]
    fn test_capitalize_only_touches_first_letter() {
        assert_eq!(capitalize("alaric"), "Alaric");
        assert_eq!(capitalize("mcDuff"), "McDuff");
        assert_eq!(capitalize(""), "");
    }
}
