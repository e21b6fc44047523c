pub mod model;

use std::fmt;

use thiserror::Error;

/// The highest value in the digit alphabet. Observations above it are
/// rejected.
pub const MAX_DIGIT: u8 = 9;

/// The smallest digit that counts as big.
pub const BIG_THRESHOLD: u8 = 5;

/// The two classes that a digit can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Digits in 5..=9.
    Big,
    /// Digits in 0..=4.
    Small,
}

impl Outcome {
    /// Classify the digit 'digit'.
    #[must_use]
    pub fn from_digit(digit: u8) -> Outcome {
        debug_assert!(digit <= MAX_DIGIT, "Invalid digit");
        if digit >= BIG_THRESHOLD {
            Outcome::Big
        } else {
            Outcome::Small
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Big => write!(f, "big"),
            Outcome::Small => write!(f, "small"),
        }
    }
}

/// The error returned when an observation is not a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("number must be between 0 and 9, got {0}")]
pub struct InvalidDigit(pub u8);

#[test]
fn test_outcome_split() {
    assert_eq!(Outcome::from_digit(0), Outcome::Small);
    assert_eq!(Outcome::from_digit(4), Outcome::Small);
    assert_eq!(Outcome::from_digit(5), Outcome::Big);
    assert_eq!(Outcome::from_digit(9), Outcome::Big);
}
