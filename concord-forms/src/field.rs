//! Free-text field parsing.

use serde::{Deserialize, Serialize};

/// Classification of one raw text field.
///
/// Empty input is "not yet valid" rather than an error; the calculator
/// stays quiet until something has been typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldState {
    /// Nothing entered, or only whitespace.
    Empty,
    /// Text that does not parse as a finite number.
    Malformed {
        /// The rejected text, trimmed.
        text: String,
    },
    /// A finite numeric value.
    Value(f64),
}

/// Parse one raw field into its state.
///
/// Surrounding whitespace is trimmed; an empty remainder is
/// [`FieldState::Empty`]. Non-finite parses (`inf`, `NaN`) are treated
/// as malformed here — the engine's own finiteness check is a backstop,
/// not the primary gate.
#[must_use]
pub fn parse_field(raw: &str) -> FieldState {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldState::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => FieldState::Value(value),
        _ => FieldState::Malformed { text: trimmed.to_owned() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_not_yet_valid() {
        assert_eq!(parse_field(""), FieldState::Empty);
        assert_eq!(parse_field("   "), FieldState::Empty);
        assert_eq!(parse_field("\t\n"), FieldState::Empty);
    }

    #[test]
    fn plain_numbers_parse_with_whitespace_trimmed() {
        assert_eq!(parse_field("3"), FieldState::Value(3.0));
        assert_eq!(parse_field(" 1.25 "), FieldState::Value(1.25));
        assert_eq!(parse_field("-0.5"), FieldState::Value(-0.5));
        assert_eq!(parse_field("4e-1"), FieldState::Value(0.4));
    }

    #[test]
    fn garbage_is_malformed_and_echoed_back() {
        assert_eq!(
            parse_field(" abc "),
            FieldState::Malformed { text: "abc".to_owned() }
        );
        assert_eq!(
            parse_field("1,5"),
            FieldState::Malformed { text: "1,5".to_owned() }
        );
    }

    #[test]
    fn non_finite_spellings_are_malformed() {
        for text in ["inf", "-inf", "infinity", "NaN", "nan"] {
            assert!(
                matches!(parse_field(text), FieldState::Malformed { .. }),
                "'{text}' must not reach the engine as a number"
            );
        }
    }

    proptest::proptest! {
        #[test]
        fn proptest_parse_never_panics(raw in ".*") {
            let _ = parse_field(&raw);
        }

        #[test]
        fn proptest_finite_values_round_trip_through_display(
            value in -1e6f64..=1e6,
        ) {
            let rendered = value.to_string();
            proptest::prop_assert_eq!(
                parse_field(&rendered),
                FieldState::Value(value),
                "Display output must parse back to the same value"
            );
        }
    }
}
