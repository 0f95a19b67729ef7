//! Tag label validation.
//!
//! Valid tags are one or more alphanumeric characters. Whitespace,
//! punctuation and separators are all rejected.

/// Validates a tag label.
///
/// # Examples
/// ```
/// use whodatapp::tags::validation::validate_tag;
///
/// assert!(validate_tag("NeedHelp").is_ok());
/// assert!(validate_tag("week3").is_ok());
///
/// assert!(validate_tag("").is_err());
/// assert!(validate_tag("late submission").is_err());
/// assert!(validate_tag("late-submission").is_err());
/// ```
pub fn validate_tag(label: &str) -> Result<(), TagValidationError> {
    if label.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = label.chars().find(|ch| !ch.is_alphanumeric()) {
        if ch.is_whitespace() {
            return Err(TagValidationError::ContainsWhitespace);
        }
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

/// Error type for tag validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag is empty
    Empty,
    /// Tag contains a space, tab or newline
    ContainsWhitespace,
    /// Tag contains a non-alphanumeric character
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag cannot be empty"),
            TagValidationError::ContainsWhitespace => {
                write!(f, "tag cannot contain whitespace")
            }
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "tag contains invalid character '{}' (only alphanumeric allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for TagValidationError {}
