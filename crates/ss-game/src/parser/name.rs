//! Character name validation.

use crate::error::NameError;

/// The longest name that fits on the character's arm.
pub const MAX_NAME_LEN: usize = 20;

/// Validate a character name, returning it trimmed.
///
/// Letters only, `exit` reserved, at most [`MAX_NAME_LEN`] characters. The
/// letters check runs first, so an overlong name with digits reports
/// [`NameError::NotLetters`].
pub fn validate_name(input: &str) -> Result<String, NameError> {
    let name = input.trim();
    if name.is_empty()
        || !name.chars().all(char::is_alphabetic)
        || name.eq_ignore_ascii_case("exit")
    {
        return Err(NameError::NotLetters);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(validate_name("Thorne").unwrap(), "Thorne");
        assert_eq!(validate_name("  Mira ").unwrap(), "Mira");
        assert_eq!(validate_name(&"a".repeat(20)).unwrap().len(), 20);
        assert_eq!(validate_name("Zoë").unwrap(), "Zoë");
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert_eq!(validate_name("Thorne42"), Err(NameError::NotLetters));
        assert_eq!(validate_name("Sir Thorne"), Err(NameError::NotLetters));
        assert_eq!(validate_name("o'Neil"), Err(NameError::NotLetters));
        assert_eq!(validate_name(""), Err(NameError::NotLetters));
    }

    #[test]
    fn rejects_reserved_word() {
        assert_eq!(validate_name("exit"), Err(NameError::NotLetters));
        assert_eq!(validate_name("EXIT"), Err(NameError::NotLetters));
    }

    #[test]
    fn rejects_long_names() {
        assert_eq!(validate_name(&"a".repeat(25)), Err(NameError::TooLong));
        assert_eq!(validate_name(&"a".repeat(21)), Err(NameError::TooLong));
    }

    #[test]
    fn the_two_failures_read_differently() {
        assert_ne!(
            NameError::NotLetters.to_string(),
            NameError::TooLong.to_string()
        );
    }
}
