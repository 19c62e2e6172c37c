//! Small validation helpers shared by the aggregate DTOs

/// Error when `value` is blank.
pub fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(())
}

/// Error unless `value` is exactly `len` ASCII letters.
pub fn require_letters(value: &str, len: usize, label: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.chars().count() != len || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("{} must contain {} letters", label, len));
    }
    Ok(())
}

/// Error when a non-empty `value` is not a plausible e-mail address.
pub fn optional_email(value: Option<&str>, label: &str) -> Result<(), String> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(format!("{} is not a valid e-mail address", label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("x", "Name").is_ok());
        assert_eq!(require("  ", "Name").unwrap_err(), "Name is required");
    }

    #[test]
    fn test_require_letters() {
        assert!(require_letters("EUR", 3, "Code").is_ok());
        assert!(require_letters(" fr ", 2, "Code").is_ok());
        assert!(require_letters("EU1", 3, "Code").is_err());
        assert!(require_letters("EURO", 3, "Code").is_err());
    }

    #[test]
    fn test_optional_email() {
        assert!(optional_email(None, "Email").is_ok());
        assert!(optional_email(Some(""), "Email").is_ok());
        assert!(optional_email(Some("ops@port.example"), "Email").is_ok());
        assert!(optional_email(Some("ops@port"), "Email").is_err());
        assert!(optional_email(Some("@port.example"), "Email").is_err());
    }
}
