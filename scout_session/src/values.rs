//! Field value parsers
//!
//! Each parser takes the raw attribute text plus its constraint and returns the
//! parsed value or a `ValueError` describing the violation. Parsers never pick a
//! default; the grammars decide what to do with a failure. Surrounding
//! whitespace is ignored.

/// Why a raw value was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("'{raw}' is not a number")]
    NotANumber { raw: String },

    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange {
        value: String,
        min: String,
        max: String,
    },

    #[error("'{raw}' is not one of {allowed}")]
    NotAllowed { raw: String, allowed: String },
}

impl ValueError {
    fn not_a_number(raw: &str) -> Self {
        Self::NotANumber {
            raw: raw.to_string(),
        }
    }

    fn out_of_range<T: std::fmt::Display>(value: &str, min: T, max: T) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    fn not_allowed<T: std::fmt::Debug>(raw: &str, allowed: &[T]) -> Self {
        Self::NotAllowed {
            raw: raw.to_string(),
            allowed: format!("{:?}", allowed),
        }
    }
}

pub type ValueResult<T> = Result<T, ValueError>;

/// Integer within `[min, max]`
pub fn int_in_range(raw: &str, min: i32, max: i32) -> ValueResult<i32> {
    let raw = raw.trim();
    let value: i32 = raw.parse().map_err(|_| ValueError::not_a_number(raw))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValueError::out_of_range(raw, min, max))
    }
}

/// Integer with no bound
pub fn int(raw: &str) -> ValueResult<i32> {
    let raw = raw.trim();
    raw.parse().map_err(|_| ValueError::not_a_number(raw))
}

/// Finite float
pub fn float(raw: &str) -> ValueResult<f32> {
    let raw = raw.trim();
    match raw.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValueError::not_a_number(raw)),
    }
}

/// Float equal to one of `allowed`
pub fn float_in_set(raw: &str, allowed: &[f32]) -> ValueResult<f32> {
    let value = float(raw)?;
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ValueError::not_allowed(raw.trim(), allowed))
    }
}

/// Float within `[min, max]`. Infinity and NaN never pass.
pub fn float_in_range(raw: &str, min: f32, max: f32) -> ValueResult<f32> {
    let raw = raw.trim();
    let value: f32 = raw.parse().map_err(|_| ValueError::not_a_number(raw))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValueError::out_of_range(raw, min, max))
    }
}

/// Single character matching one of `allowed`, case-insensitive. Returns the
/// lowercase character.
pub fn enum_char(raw: &str, allowed: &[char]) -> ValueResult<char> {
    let raw = raw.trim();
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let lowered = c.to_ascii_lowercase();
            if allowed.iter().any(|a| a.to_ascii_lowercase() == lowered) {
                Ok(lowered)
            } else {
                Err(ValueError::not_allowed(raw, allowed))
            }
        }
        _ => Err(ValueError::not_allowed(raw, allowed)),
    }
}

/// Word matching one of `allowed`, case-insensitive. Returns the allowed
/// spelling.
pub fn enum_str<'a>(raw: &str, allowed: &[&'a str]) -> ValueResult<&'a str> {
    let raw = raw.trim();
    allowed
        .iter()
        .find(|a| a.eq_ignore_ascii_case(raw))
        .copied()
        .ok_or_else(|| ValueError::not_allowed(raw, allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_int_in_range() {
        assert_eq!(int_in_range("3", 1, 9), Ok(3));
        assert_eq!(int_in_range(" 9 ", 1, 9), Ok(9));
        assert_matches!(int_in_range("10", 1, 9), Err(ValueError::OutOfRange { .. }));
        assert_matches!(int_in_range("0", 1, 9), Err(ValueError::OutOfRange { .. }));
        assert_matches!(int_in_range("x", 1, 9), Err(ValueError::NotANumber { .. }));
        assert_matches!(int_in_range("", 1, 9), Err(ValueError::NotANumber { .. }));
        assert_matches!(int_in_range("2.5", 1, 9), Err(ValueError::NotANumber { .. }));
    }

    #[test]
    fn test_float_in_set() {
        assert_eq!(float_in_set(".1", &[0.1, 3.0]), Ok(0.1));
        assert_eq!(float_in_set("3", &[0.1, 3.0]), Ok(3.0));
        assert_matches!(
            float_in_set("0.5", &[0.1, 3.0]),
            Err(ValueError::NotAllowed { .. })
        );
        assert_matches!(
            float_in_set("slow", &[0.1, 3.0]),
            Err(ValueError::NotANumber { .. })
        );
    }

    #[test]
    fn test_float_in_range_rejects_non_finite() {
        assert_eq!(float_in_range("-170", -170.0, 170.0), Ok(-170.0));
        assert_matches!(
            float_in_range("200", -170.0, 170.0),
            Err(ValueError::OutOfRange { .. })
        );
        assert!(float_in_range("inf", -170.0, 170.0).is_err());
        assert!(float_in_range("NaN", -170.0, 170.0).is_err());
    }

    #[test]
    fn test_float_unbounded() {
        assert_eq!(float("45.5"), Ok(45.5));
        assert_eq!(float("-720"), Ok(-720.0));
        assert!(float("inf").is_err());
        assert!(float("ninety").is_err());
    }

    #[test]
    fn test_enum_char() {
        assert_eq!(enum_char("L", &['l', 'r']), Ok('l'));
        assert_eq!(enum_char(" r", &['l', 'r']), Ok('r'));
        assert!(enum_char("x", &['l', 'r']).is_err());
        assert!(enum_char("left", &['l', 'r']).is_err());
        assert!(enum_char("", &['l', 'r']).is_err());
    }

    #[test]
    fn test_enum_str() {
        assert_eq!(enum_str("PURPLE", &["yellow", "purple"]), Ok("purple"));
        assert_eq!(enum_str("yellow", &["yellow", "purple"]), Ok("yellow"));
        assert_matches!(
            enum_str("green", &["yellow", "purple"]),
            Err(ValueError::NotAllowed { .. })
        );
    }
}
