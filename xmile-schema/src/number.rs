//! Numeric attribute values that keep their lexical form.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// A unit-less number as found in XMILE attributes.
///
/// XMILE files freely mix `5` and `5.0`. The variant records which form was read so that
/// writing the value back produces the same form: integers never gain a decimal point and
/// floats never lose theirs.
///
/// The value is kept, not the exact text. A leading `+`, leading zeros and surrounding
/// whitespace are dropped (`+05` is written back as `5`), and floats are written in their
/// shortest round-trip form (`1E3` is written back as `1000.0`). Integer text outside the `i64`
/// range is rejected rather than widened to a float.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid number: '{0}'")]
pub struct ParseNumberError(String);

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns `true` if the value was written in integer form.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        if is_integer_form(s) {
            return Err(ParseNumberError(s.to_owned()));
        }
        match s {
            "INF" | "+INF" => Ok(Number::Float(f64::INFINITY)),
            "-INF" => Ok(Number::Float(f64::NEG_INFINITY)),
            "NaN" => Ok(Number::Float(f64::NAN)),
            _ => s
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| ParseNumberError(s.to_owned())),
        }
    }
}

/// An optional sign followed by decimal digits only.
fn is_integer_form(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) if v.is_nan() => write!(f, "NaN"),
            Number::Float(v) if v.is_infinite() => {
                write!(f, "{}", if v > 0.0 { "INF" } else { "-INF" })
            }
            // `Debug` gives the shortest round-trip form and always keeps a `.` or exponent
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("5".parse::<Number>(), Ok(Number::Int(5)));
        assert_eq!("-12".parse::<Number>(), Ok(Number::Int(-12)));
        assert_eq!(" 7 ".parse::<Number>(), Ok(Number::Int(7)));
        assert_eq!("5.5".parse::<Number>(), Ok(Number::Float(5.5)));
        assert_eq!("5.0".parse::<Number>(), Ok(Number::Float(5.0)));
        assert_eq!("1e-3".parse::<Number>(), Ok(Number::Float(0.001)));
        assert_eq!("INF".parse::<Number>(), Ok(Number::Float(f64::INFINITY)));
        assert_eq!(
            "-INF".parse::<Number>(),
            Ok(Number::Float(f64::NEG_INFINITY))
        );
        assert!(matches!("NaN".parse::<Number>(), Ok(Number::Float(v)) if v.is_nan()));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "fast".parse::<Number>(),
            Err(ParseNumberError("fast".to_owned()))
        );
        assert!("".parse::<Number>().is_err());
        assert!("1,5".parse::<Number>().is_err());
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        assert_eq!(
            "99999999999999999999".parse::<Number>(),
            Err(ParseNumberError("99999999999999999999".to_owned()))
        );
        assert!("-99999999999999999999".parse::<Number>().is_err());
        assert_eq!(
            "9223372036854775807".parse::<Number>(),
            Ok(Number::Int(i64::MAX))
        );
        // Float text of the same magnitude keeps its float form.
        assert_eq!(
            "99999999999999999999.0".parse::<Number>(),
            Ok(Number::Float(1e20))
        );
    }

    #[test]
    fn test_lexical_normalization() {
        assert_eq!("+5".parse::<Number>().unwrap().to_string(), "5");
        assert_eq!("05".parse::<Number>().unwrap().to_string(), "5");
        assert_eq!("1E3".parse::<Number>().unwrap().to_string(), "1000.0");
    }

    #[test]
    fn test_display_keeps_form() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Float(5.5).to_string(), "5.5");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "INF");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-INF");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_display_parses_back() {
        for n in [
            Number::Int(0),
            Number::Int(i64::MIN),
            Number::Float(0.1),
            Number::Float(1e-7),
            Number::Float(1e21),
            Number::Float(123456.789),
        ] {
            assert_eq!(n.to_string().parse::<Number>(), Ok(n), "{n}");
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Number::from(3), Number::Int(3));
        assert_eq!(Number::from(3.5), Number::Float(3.5));
        assert_eq!(Number::Int(4).as_f64(), 4.0);
        assert!(Number::Int(4).is_integer());
        assert!(!Number::Float(4.0).is_integer());
    }
}
