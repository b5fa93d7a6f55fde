//! Input validation for query parameters.

use crate::error::ArmsNetError;

/// Earliest delivery year the registry covers.
pub const MIN_YEAR: i64 = 1950;
/// Latest delivery year accepted, leaving room for orders far in the future.
pub const MAX_YEAR: i64 = 2100;
/// Longest accepted entity code.
pub const MAX_ENTITY_LENGTH: usize = 32;

/// Validates a delivery year.
pub fn validate_year(year: i64) -> Result<i64, ArmsNetError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ArmsNetError::InvalidInput(format!(
            "year {} outside {}-{}",
            year, MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(year)
}

/// Validates a delivery-year window.
pub fn validate_year_window(low: i64, high: i64) -> Result<(i64, i64), ArmsNetError> {
    let low = validate_year(low)?;
    let high = validate_year(high)?;
    if low > high {
        return Err(ArmsNetError::InvalidInput(format!(
            "low year {} is after high year {}",
            low, high
        )));
    }
    Ok((low, high))
}

/// Validates and normalizes an entity code.
///
/// The registry also lists non-state entities (rebel groups, international
/// organisations), so only the shape is checked, not membership in a
/// country list. Codes are trimmed and upper-cased.
pub fn validate_entity(code: &str) -> Result<String, ArmsNetError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(ArmsNetError::InvalidInput(
            "empty entity code".to_string(),
        ));
    }
    if trimmed.len() > MAX_ENTITY_LENGTH {
        return Err(ArmsNetError::InvalidInput(format!(
            "entity code longer than {} bytes",
            MAX_ENTITY_LENGTH
        )));
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err(ArmsNetError::InvalidInput(
            "entity code contains control characters".to_string(),
        ));
    }
    Ok(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_year(1950).is_ok());
        assert!(validate_year(2024).is_ok());
        assert!(validate_year(2100).is_ok());
        assert!(validate_year(1949).is_err());
        assert!(validate_year(2101).is_err());
        assert!(validate_year(-5).is_err());
    }

    #[test]
    fn test_validate_year_window() {
        assert_eq!(validate_year_window(2000, 2010).unwrap(), (2000, 2010));
        assert_eq!(validate_year_window(2010, 2010).unwrap(), (2010, 2010));
        assert!(validate_year_window(2010, 2000).is_err());
        assert!(validate_year_window(1900, 2010).is_err());
    }

    #[test]
    fn test_validate_entity_normalizes() {
        assert_eq!(validate_entity("usa").unwrap(), "USA");
        assert_eq!(validate_entity("  ind ").unwrap(), "IND");
        assert_eq!(validate_entity("UN").unwrap(), "UN");
    }

    #[test]
    fn test_validate_entity_rejects_bad_shapes() {
        assert!(validate_entity("").is_err());
        assert!(validate_entity("   ").is_err());
        assert!(validate_entity("abc\u{0}def").is_err());
        assert!(validate_entity(&"x".repeat(33)).is_err());
    }
}
