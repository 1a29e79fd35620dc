//! Form input coercion shared by the entity forms

use crate::error::{DeskError, DeskResult};

/// Trimmed text, or `MissingField` when blank
pub fn required_text(field: &'static str, input: &str) -> DeskResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DeskError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Trimmed text, `None` when blank
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a finite decimal. Blank input yields `None`.
pub fn optional_decimal(field: &'static str, input: &str) -> DeskResult<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DeskError::InvalidNumber {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Parse an integer. Blank input yields `None`.
pub fn optional_integer(field: &'static str, input: &str) -> DeskResult<Option<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| DeskError::InvalidNumber {
            field,
            input: trimmed.to_string(),
        })
}

pub fn non_negative(field: &'static str, value: f64) -> DeskResult<f64> {
    if value < 0.0 {
        return Err(DeskError::Negative { field });
    }
    Ok(value)
}

/// Render money with two decimals and thousands separators (`45,000.00`)
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("Name", "  Lamp ").unwrap(), "Lamp");
        assert!(matches!(
            required_text("Name", "   "),
            Err(DeskError::MissingField { field: "Name" })
        ));
    }

    #[test]
    fn test_optional_decimal() {
        assert_eq!(optional_decimal("Price", "").unwrap(), None);
        assert_eq!(optional_decimal("Price", " 12.5 ").unwrap(), Some(12.5));
        assert!(matches!(
            optional_decimal("Price", "12,5"),
            Err(DeskError::InvalidNumber { field: "Price", .. })
        ));
        assert!(optional_decimal("Price", "inf").is_err());
        assert!(optional_decimal("Price", "NaN").is_err());
    }

    #[test]
    fn test_optional_integer() {
        assert_eq!(optional_integer("Quantity", "40").unwrap(), Some(40));
        assert_eq!(optional_integer("Quantity", " ").unwrap(), None);
        assert!(optional_integer("Quantity", "4.5").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("Price", 0.0).unwrap(), 0.0);
        assert!(matches!(
            non_negative("Price", -1.0),
            Err(DeskError::Negative { field: "Price" })
        ));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(800.0), "800.00");
        assert_eq!(format_amount(45000.0), "45,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1500.5), "-1,500.50");
    }
}
