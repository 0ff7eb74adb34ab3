use crate::utils::error::{EnhancerError, Result};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static RUT_SHAPE: OnceLock<Regex> = OnceLock::new();

fn rut_shape() -> &'static Regex {
    // Digits followed by exactly one check character (digit or K).
    RUT_SHAPE.get_or_init(|| Regex::new(r"^[0-9]+[0-9K]$").unwrap())
}

/// Strips dots and hyphens and uppercases the check character.
pub fn clean_rut(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// Shape-only RUT check: at least 8 characters after cleaning, digits
/// plus one trailing digit-or-K. Does NOT verify the modulus-11 check
/// digit, so shape-correct but malformed ids pass.
pub fn validate_rut(raw: &str) -> bool {
    let clean = clean_rut(raw);
    if clean.len() < 8 {
        return false;
    }
    rut_shape().is_match(&clean)
}

pub fn validate_positive_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(EnhancerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnhancerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
