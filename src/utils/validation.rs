use crate::utils::error::{PrinterError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PrinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PrinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN, which compares false both ways, is rejected.
    if !(value >= min && value <= max) {
        return Err(PrinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// The fixed-pitch faces every PostScript printer carries.
pub const MONOSPACE_FONTS: [&str; 4] = [
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
];

pub fn validate_monospace_font(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if !MONOSPACE_FONTS.contains(&name) {
        return Err(PrinterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Font must be one of {}", MONOSPACE_FONTS.join(", ")),
        });
    }
    Ok(())
}

fn icao_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{4}$").expect("static ICAO pattern"))
}

pub fn validate_icao_codes(field_name: &str, codes: &[String]) -> Result<()> {
    for code in codes {
        if !icao_pattern().is_match(code.trim()) {
            return Err(PrinterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: code.clone(),
                reason: "Airport codes must be 4-character ICAO identifiers".to_string(),
            });
        }
    }
    Ok(())
}
