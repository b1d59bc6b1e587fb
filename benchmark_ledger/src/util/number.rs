//!
//! Number formatting compatible with JavaScript.
//!
//! Ledger files are produced by a JavaScript tool, so numbers must be printed
//! the same way `Number.prototype.toString` and `JSON.stringify` do, or
//! re-serializing a file would rewrite records that were never touched.
//!

use serde::Serialize;

///
/// Serializes a float with the digits `JSON.stringify` writes for it.
///
/// Only valid for JSON serializers. Non-finite values have no JSON form and fail.
///
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let raw = serde_json::value::RawValue::from_string(format(*value))
        .map_err(|error| {
            <S::Error as serde::ser::Error>::custom(format!("number {value}: {error}"))
        })?;
    raw.serialize(serializer)
}

///
/// Formats a float the way JavaScript template literals do.
///
/// Exponential notation is used below `1e-6` and from `1e21` upwards, with an
/// explicit sign on positive exponents.
///
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_owned()
        } else if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponential = format!("{value:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        };
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    #[test]
    fn format_plain() {
        assert_eq!(super::format(14.166366709354254), "14.166366709354254");
        assert_eq!(super::format(0.000009801025607542125), "0.000009801025607542125");
        assert_eq!(super::format(135.0), "135");
        assert_eq!(super::format(-0.0), "0");
    }

    #[test]
    fn format_exponential() {
        assert_eq!(super::format(9.8e-7), "9.8e-7");
        assert_eq!(super::format(1e21), "1e+21");
        assert_eq!(super::format(f64::NAN), "NaN");
    }

    #[test]
    fn serialize_like_json_stringify() {
        #[derive(serde::Serialize)]
        struct Value(#[serde(serialize_with = "super::serialize")] f64);

        for (value, expected) in [
            (135.0, "135"),
            (70589.7299227533, "70589.7299227533"),
            (0.0000015, "0.0000015"),
            (0.0000099, "0.0000099"),
            (1e19, "10000000000000000000"),
            (1e21, "1e+21"),
            (1.5e-7, "1.5e-7"),
        ] {
            assert_eq!(
                serde_json::to_string(&Value(value)).expect("Always valid"),
                expected
            );
        }
        assert!(serde_json::to_string(&Value(f64::INFINITY)).is_err());
    }
}
