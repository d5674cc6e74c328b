//! Item quantities.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A strictly positive count of units.
///
/// Stored entries never hold zero: removing the last unit deletes the entry
/// instead. Deserializing `0` is rejected for the same reason.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Validate a caller-supplied amount. Zero, negative and values above
    /// `u32::MAX` are `InvalidQuantity`.
    pub fn new(amount: i64) -> Result<Self, DomainError> {
        match u32::try_from(amount) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(DomainError::InvalidQuantity(amount)),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn checked_add(self, other: Quantity) -> Result<Self, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(DomainError::InvalidQuantity(i64::from(self.0) + i64::from(other.0)))
    }

    /// Subtract `other`, returning `None` when nothing would remain.
    ///
    /// Callers must check `other <= self` first.
    pub fn saturating_remainder(self, other: Quantity) -> Option<Self> {
        match self.0.saturating_sub(other.0) {
            0 => None,
            n => Some(Self(n)),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(Quantity::new(0), Err(DomainError::InvalidQuantity(0)));
        assert_eq!(Quantity::new(-3), Err(DomainError::InvalidQuantity(-3)));
        assert_eq!(
            Quantity::new(i64::from(u32::MAX) + 1),
            Err(DomainError::InvalidQuantity(i64::from(u32::MAX) + 1))
        );
    }

    #[test]
    fn add_overflow_is_rejected() {
        let max = Quantity::new(i64::from(u32::MAX)).unwrap();
        let one = Quantity::new(1).unwrap();
        assert!(matches!(
            max.checked_add(one),
            Err(DomainError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("4").unwrap().get(), 4);
    }

    proptest! {
        #[test]
        fn remainder_matches_integer_subtraction(a in 1u32..10_000, b in 1u32..10_000) {
            prop_assume!(b <= a);
            let qa = Quantity::new(i64::from(a)).unwrap();
            let qb = Quantity::new(i64::from(b)).unwrap();
            let rest = qa.saturating_remainder(qb).map(|q| q.get()).unwrap_or(0);
            prop_assert_eq!(rest, a - b);
        }
    }
}
