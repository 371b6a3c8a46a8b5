//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref STATE_ABBR_RE: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();
    // Brazilian CEP, with or without the dash: 01310-100 or 01310100.
    static ref ZIP_CODE_RE: Regex = Regex::new(r"^\d{5}-?\d{3}$").unwrap();
}

/// Validates a two-letter uppercase state abbreviation (e.g. "SP", "RJ").
pub fn validate_state_abbr(abbr: &str) -> Result<(), ValidationError> {
    if STATE_ABBR_RE.is_match(abbr) {
        Ok(())
    } else {
        let mut err = ValidationError::new("state_abbr");
        err.message = Some("State abbreviation must be two uppercase letters".into());
        Err(err)
    }
}

/// Validates a Brazilian postal code (CEP).
pub fn validate_zip_code(zip: &str) -> Result<(), ValidationError> {
    if ZIP_CODE_RE.is_match(zip) {
        Ok(())
    } else {
        let mut err = ValidationError::new("zip_code");
        err.message = Some("Zip code must be a valid CEP (eight digits)".into());
        Err(err)
    }
}

/// Validates an attachment address. Only http(s) links are accepted.
pub fn validate_attachment_addr(addr: &str) -> Result<(), ValidationError> {
    if addr.starts_with("http://") || addr.starts_with("https://") {
        Ok(())
    } else {
        let mut err = ValidationError::new("attachment_addr");
        err.message = Some("Attachment address must be an http(s) URL".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_state_abbr_valid() {
        assert!(validate_state_abbr("SP").is_ok());
        assert!(validate_state_abbr("RJ").is_ok());
        assert!(validate_state_abbr("MG").is_ok());
    }

    #[test]
    fn test_validate_state_abbr_invalid() {
        assert!(validate_state_abbr("sp").is_err());
        assert!(validate_state_abbr("S").is_err());
        assert!(validate_state_abbr("SPX").is_err());
        assert!(validate_state_abbr("").is_err());
        assert!(validate_state_abbr("12").is_err());
    }

    #[test]
    fn test_validate_zip_code_valid() {
        assert!(validate_zip_code("01310-100").is_ok());
        assert!(validate_zip_code("01310100").is_ok());
    }

    #[test]
    fn test_validate_zip_code_invalid() {
        assert!(validate_zip_code("1310-100").is_err());
        assert!(validate_zip_code("abcde-fgh").is_err());
        assert!(validate_zip_code("01310-10").is_err());
        assert!(validate_zip_code("").is_err());
    }

    #[test]
    fn test_validate_attachment_addr() {
        assert!(validate_attachment_addr("https://cdn.example.com/photo.jpg").is_ok());
        assert!(validate_attachment_addr("http://example.com/a.png").is_ok());
        assert!(validate_attachment_addr("ftp://example.com/a.png").is_err());
        assert!(validate_attachment_addr("photo.jpg").is_err());
    }
}
