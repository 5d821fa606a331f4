//! Common validation logic shared by request DTOs.

use validator::ValidationError;

/// Normalizes an email for storage and lookup: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Custom validator rejecting strings that are empty after trimming.
///
/// `#[validate(length(min = 1))]` accepts all-whitespace input, which the
/// zero-config browser `required` attribute also lets through; required
/// free-text fields use this instead.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Field must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Password policy: minimum 8 characters with at least one uppercase
/// letter, one lowercase letter, and one digit.
pub fn check_password_strength(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@HOA.Test "), "admin@hoa.test");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(not_blank("Unit 2A").is_ok());
    }

    #[test]
    fn test_not_blank_rejects_empty() {
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_not_blank_rejects_whitespace_only() {
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn test_password_strength_valid() {
        assert!(check_password_strength("Secret123!").is_ok());
    }

    #[test]
    fn test_password_strength_too_short() {
        assert!(check_password_strength("Ab1").is_err());
    }

    #[test]
    fn test_password_strength_no_uppercase() {
        assert!(check_password_strength("secret123").is_err());
    }

    #[test]
    fn test_password_strength_no_lowercase() {
        assert!(check_password_strength("SECRET123").is_err());
    }

    #[test]
    fn test_password_strength_no_digit() {
        assert!(check_password_strength("SecretPassword").is_err());
    }
}
