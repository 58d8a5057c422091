// src/domain/money.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency amount in minor units (cents).
///
/// Stored as an unsigned integer so prices are non-negative by construction
/// and never pick up floating point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn whole_dollars(self) -> u64 {
        self.cents() / 100
    }

    pub const fn remainder_cents(self) -> u64 {
        self.cents() % 100
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.whole_dollars(), self.remainder_cents())
    }
}
