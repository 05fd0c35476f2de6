//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a clan tag is 2 to 6 alphanumeric characters.
///
/// # Examples
///
/// ```ignore
/// validate_clan_tag("NB01")   // Ok
/// validate_clan_tag("x")      // Err - too short
/// validate_clan_tag("TAG!!")  // Err - punctuation
/// ```
pub fn validate_clan_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.len() < 2 || tag.len() > 6 {
        let mut err = ValidationError::new("clan_tag_length");
        err.message =
            Some(format!("Clan tag must be 2 to 6 characters (got {})", tag.len()).into());
        return Err(err);
    }

    if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut err = ValidationError::new("clan_tag_format");
        err.message = Some("Clan tag must contain only alphanumeric characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_clan_tag_valid() {
        assert!(validate_clan_tag("NB").is_ok());
        assert!(validate_clan_tag("CLAN01").is_ok());
        assert!(validate_clan_tag("xx9").is_ok());
    }

    #[test]
    fn test_validate_clan_tag_invalid_length() {
        assert!(validate_clan_tag("x").is_err()); // too short
        assert!(validate_clan_tag("TOOLONG").is_err()); // too long
        assert!(validate_clan_tag("").is_err()); // empty
    }

    #[test]
    fn test_validate_clan_tag_invalid_format() {
        assert!(validate_clan_tag("TA G").is_err()); // space
        assert!(validate_clan_tag("TAG!").is_err()); // punctuation
        assert!(validate_clan_tag("täg").is_err()); // non-ascii
    }
}
