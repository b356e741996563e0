//! Strong type definitions for the KarmaStore.
//!
//! Identities and action names arrive from the hosting layer as opaque
//! strings; newtypes keep them from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque account identity, authenticated and supplied by the host.
///
/// The core never inspects the contents. Two accounts are the same exactly
/// when their identifiers compare equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque action identifier, the unique key of the action registry.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    /// Create a new ActionId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionId({})", self.0)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ActionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A non-negative amount of karma units granted per action occurrence.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RewardAmount(u64);

impl RewardAmount {
    /// The zero amount, also what unknown actions read as.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole karma units.
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Convert from the host's native numeric type.
    ///
    /// Fractional amounts floor toward zero: 7.9 stores as 7. Negative and
    /// non-finite inputs store as zero; the amount domain is unsigned. No
    /// upper bound is enforced below `u64::MAX`.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw.floor() as u64)
        } else {
            Self(0)
        }
    }

    /// Get the amount in whole karma units.
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Whether this amount grants nothing.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RewardAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RewardAmount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}
