use thiserror::Error;

/// Minimum number of characters, after trimming, that the service will
/// accept as text to analyze.
pub const MIN_TEXT_LENGTH: usize = 2;

/// Errors returned when text fails the pre-request check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("text to analyze must be provided")]
    MissingText,

    #[error("text to analyze must be at least {min} characters after trimming, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Check that `text` is worth sending to the service.
///
/// Fails with [`ValidationError::MissingText`] when no text is given, or with
/// [`ValidationError::TooShort`] when the text trimmed of leading and trailing
/// whitespace is shorter than [`MIN_TEXT_LENGTH`]. Every character at or
/// below U+0020 counts as whitespace here, control characters included;
/// wider Unicode spaces such as U+00A0 do not. Length is measured in
/// characters, not bytes.
///
/// Accepts either `&str` or `Option<&str>`:
///
/// ```rust
/// use alchemy_api::{validate_text, ValidationError};
///
/// assert!(validate_text("civil war").is_ok());
/// assert_eq!(validate_text(None), Err(ValidationError::MissingText));
/// ```
pub fn validate_text<'a>(text: impl Into<Option<&'a str>>) -> Result<(), ValidationError> {
    let text = text.into().ok_or(ValidationError::MissingText)?;

    let actual = text.trim_matches(|c: char| c <= ' ').chars().count();
    if actual < MIN_TEXT_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_TEXT_LENGTH,
            actual,
        });
    }

    Ok(())
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_rejected() {
        assert_eq!(validate_text(None), Err(ValidationError::MissingText));
    }

    #[test]
    fn empty_text_rejected() {
        assert_eq!(
            validate_text(""),
            Err(ValidationError::TooShort { min: 2, actual: 0 })
        );
    }

    #[test]
    fn whitespace_only_rejected() {
        assert_eq!(
            validate_text("\t \r\n"),
            Err(ValidationError::TooShort { min: 2, actual: 0 })
        );
    }

    #[test]
    fn single_char_after_trim_rejected() {
        assert_eq!(
            validate_text("   a   "),
            Err(ValidationError::TooShort { min: 2, actual: 1 })
        );
    }

    #[test]
    fn boundary_length_accepted() {
        assert_eq!(validate_text("ab"), Ok(()));
        assert_eq!(validate_text("  ab  "), Ok(()));
    }

    #[test]
    fn inner_whitespace_counts() {
        assert_eq!(validate_text(" a b "), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert_eq!(validate_text("éé"), Ok(()));
        assert_eq!(
            validate_text("é"),
            Err(ValidationError::TooShort { min: 2, actual: 1 })
        );
    }

    #[test]
    fn control_characters_are_trimmed() {
        assert_eq!(
            validate_text("\u{1}a"),
            Err(ValidationError::TooShort { min: 2, actual: 1 })
        );
        assert_eq!(
            validate_text("\u{0}\u{1}a\u{1f}"),
            Err(ValidationError::TooShort { min: 2, actual: 1 })
        );
    }

    #[test]
    fn non_breaking_space_is_not_trimmed() {
        assert_eq!(validate_text("\u{a0}a"), Ok(()));
    }

    #[test]
    fn some_text_is_accepted_like_plain_text() {
        assert_eq!(validate_text(Some("impending civil war")), Ok(()));
    }

    #[test]
    fn error_message_names_lengths() {
        let err = validate_text("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "text to analyze must be at least 2 characters after trimming, got 1"
        );
    }
}
