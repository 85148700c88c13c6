use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Pump price in euros.
#[must_use]
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Price(pub OrderedFloat<f64>);

impl Price {
    /// Round the price to [mills][1], the feed's stated precision.
    ///
    /// The feed occasionally carries floating-point noise beyond the third
    /// decimal; every comparison, storage, and display goes through this.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Mill_(currency)
    pub fn round_to_mills(self) -> Self {
        Self(OrderedFloat((self.0.0 * 1000.0).round() / 1000.0))
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(OrderedFloat(value))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0.0)
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}€", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_mills() {
        assert_abs_diff_eq!(Price::from(1.8589999).round_to_mills().0.0, 1.859);
        assert_abs_diff_eq!(Price::from(0.0015).round_to_mills().0.0, 0.002);
    }

    #[test]
    fn test_round_to_mills_is_idempotent() {
        let rounded = Price::from(1.8485001).round_to_mills();
        assert_eq!(rounded.round_to_mills(), rounded);
    }

    #[test]
    fn test_noise_rounds_equal() {
        assert_eq!(Price::from(1.859_000_1).round_to_mills(), Price::from(1.859).round_to_mills());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from(1.849).to_string(), "1.849");
        assert_eq!(Price::from(1.8).to_string(), "1.800");
    }
}
