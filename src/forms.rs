//! Form payloads posted by the list page.
//!
//! Quantities arrive as raw strings and are parsed explicitly so a bad value
//! becomes `ServiceError::InvalidInput` instead of an extractor rejection.

use crate::errors::ServiceError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub quantity: String,
}

/// Parses a form quantity as a signed 32-bit integer, ignoring surrounding
/// whitespace.
pub fn parse_quantity(raw: &str) -> Result<i32, ServiceError> {
    let trimmed = raw.trim();
    trimmed.parse::<i32>().map_err(|_| {
        ServiceError::InvalidInput(format!("quantity must be an integer, got {:?}", trimmed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("10", 10)]
    #[case(" 7 ", 7)]
    #[case("0", 0)]
    #[case("-3", -3)]
    #[case("+4", 4)]
    fn accepts_integers(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(parse_quantity(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("ten")]
    #[case("1.5")]
    #[case("2147483648")]
    #[case("12abc")]
    fn rejects_non_integers(#[case] raw: &str) {
        assert!(matches!(
            parse_quantity(raw),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    proptest! {
        #[test]
        fn any_i32_survives_formatting(n in any::<i32>()) {
            prop_assert_eq!(parse_quantity(&n.to_string()).unwrap(), n);
        }

        #[test]
        fn alphabetic_input_is_rejected(s in "[a-zA-Z]{1,12}") {
            prop_assert!(parse_quantity(&s).is_err());
        }
    }
}
