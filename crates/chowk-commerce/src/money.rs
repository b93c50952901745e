//! Money type for rupee amounts.
//!
//! Uses a paise-based integer representation to avoid floating-point
//! precision issues in price arithmetic. On the wire, amounts serialize
//! as plain rupee numbers (`200`, `49.5`) to match the storefront's
//! JSON contract.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A rupee amount stored as whole paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money {
    paise: i64,
}

impl Money {
    /// Create a Money value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from a rupee amount.
    pub fn from_rupees(rupees: f64) -> Self {
        Self {
            paise: (rupees * 100.0).round() as i64,
        }
    }

    /// The amount in paise.
    pub fn paise(&self) -> i64 {
        self.paise
    }

    /// The amount in rupees.
    pub fn rupees(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.paise > 0
    }

    /// Subtract, saturating at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::from_paise((self.paise - other.paise).max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_paise(self.paise + rhs.paise)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::from_paise(self.paise - rhs.paise)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paise % 100 == 0 {
            write!(f, "\u{20b9}{}", self.paise / 100)
        } else {
            write!(f, "\u{20b9}{:.2}", self.rupees())
        }
    }
}

// Wire format is a bare rupee number. Whole amounts serialize as
// integers so payloads read `"originalPrice": 200`, not `200.0`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.paise % 100 == 0 {
            serializer.serialize_i64(self.paise / 100)
        } else {
            serializer.serialize_f64(self.rupees())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        if !rupees.is_finite() {
            return Err(de::Error::custom("money amount must be finite"));
        }
        Ok(Money::from_rupees(rupees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(200.0).paise(), 20000);
        assert_eq!(Money::from_rupees(49.99).paise(), 4999);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(200.0);
        let b = Money::from_rupees(100.0);
        assert_eq!(a - b, Money::from_rupees(100.0));
        assert_eq!(a + b, Money::from_rupees(300.0));
        assert_eq!(b.saturating_sub(a), Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_rupees(100.0) < Money::from_rupees(100.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(200.0).to_string(), "\u{20b9}200");
        assert_eq!(Money::from_rupees(49.5).to_string(), "\u{20b9}49.50");
    }

    #[test]
    fn test_wire_format_is_bare_number() {
        let whole = serde_json::to_string(&Money::from_rupees(200.0)).unwrap();
        assert_eq!(whole, "200");

        let fractional = serde_json::to_string(&Money::from_rupees(49.5)).unwrap();
        assert_eq!(fractional, "49.5");

        let parsed: Money = serde_json::from_str("200").unwrap();
        assert_eq!(parsed, Money::from_rupees(200.0));
    }
}
