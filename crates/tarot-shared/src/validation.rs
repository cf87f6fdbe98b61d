//! Request validation and concern sanitization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::reading::Category;

pub const MIN_CONCERN_LENGTH: usize = 10;
pub const MAX_CONCERN_LENGTH: usize = 500;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// A request that passed validation, with the concern already sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub category: Category,
    pub concern: String,
}

/// Strip markup tags and surrounding whitespace
pub fn sanitize_concern(input: &str) -> String {
    MARKUP_TAG.replace_all(input, "").trim().to_string()
}

/// Validate raw request fields.
///
/// Checks run in order and stop at the first failure: category, concern
/// presence, trimmed minimum length, raw maximum length. Empty strings
/// count as absent. Lengths are in characters.
pub fn validate_request(
    category: Option<&str>,
    concern: Option<&str>,
) -> Result<ValidatedRequest, ValidationError> {
    let category = match category.filter(|c| !c.is_empty()) {
        None => return Err(ValidationError::InvalidCategory { provided: None }),
        Some(raw) => Category::parse(raw).ok_or_else(|| ValidationError::InvalidCategory {
            provided: Some(raw.to_string()),
        })?,
    };

    let concern = concern
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::MissingConcern)?;

    if concern.trim().chars().count() < MIN_CONCERN_LENGTH {
        return Err(ValidationError::ConcernTooShort {
            min: MIN_CONCERN_LENGTH,
        });
    }

    if concern.chars().count() > MAX_CONCERN_LENGTH {
        return Err(ValidationError::ConcernTooLong {
            max: MAX_CONCERN_LENGTH,
        });
    }

    let sanitized = sanitize_concern(concern);
    // Stored concerns must stay within bounds even when most of the input was markup
    if sanitized.chars().count() < MIN_CONCERN_LENGTH {
        return Err(ValidationError::ConcernTooShort {
            min: MIN_CONCERN_LENGTH,
        });
    }

    Ok(ValidatedRequest {
        category,
        concern: sanitized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(
            sanitize_concern("<script>alert(1)</script>hello"),
            "alert(1)hello"
        );
        assert_eq!(sanitize_concern("  <b>굵게</b> 쓴 고민  "), "굵게 쓴 고민");
        assert_eq!(sanitize_concern("a < b and c > d"), "a  d");
    }

    #[test]
    fn test_whitespace_is_trimmed_before_min_check() {
        let padded = format!("   {}   ", "가".repeat(9));
        assert_eq!(
            validate_request(Some("love"), Some(&padded)),
            Err(ValidationError::ConcernTooShort { min: 10 })
        );
    }

    #[test]
    fn test_markup_only_concern_is_too_short() {
        let concern = "<div></div><span>짧은글</span>";
        assert_eq!(
            validate_request(Some("etc"), Some(concern)),
            Err(ValidationError::ConcernTooShort { min: 10 })
        );
    }

    #[test]
    fn test_category_checked_before_concern() {
        assert_eq!(
            validate_request(Some("weather"), None),
            Err(ValidationError::InvalidCategory {
                provided: Some("weather".into())
            })
        );
        assert_eq!(
            validate_request(Some(""), Some("충분히 긴 고민 내용입니다")),
            Err(ValidationError::InvalidCategory { provided: None })
        );
    }
}
