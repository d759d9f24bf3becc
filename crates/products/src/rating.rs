//! Rating value object and average computation.

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// A single product rating, guaranteed to lie in `1..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating.
    pub fn new(value: i64) -> DomainResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::rating_out_of_range(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for Rating {}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Arithmetic mean of `ratings`, rounded to two decimal places.
///
/// No ratings yet is a valid state and averages to `0.0`.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}
