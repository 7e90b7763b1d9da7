// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Money amounts stored as whole cents.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use anyhow::{Result, anyhow, bail};

/// Non-negative price in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Parse a user-facing amount such as `"$10"`, `"12.5"` or `" $12.50 "`.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, non-digit characters, more than two
    /// fraction digits, or amounts that overflow `u64` cents.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if amount.is_empty() {
            bail!("Price is empty: {raw:?}");
        }

        let (whole, fraction) = match amount.split_once('.') {
            Some((w, f)) => (w, f),
            None => (amount, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Invalid price: {raw:?}");
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Invalid price (at most two decimals): {raw:?}");
        }

        let dollars: u64 = whole
            .parse()
            .map_err(|_| anyhow!("Price out of range: {raw:?}"))?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().unwrap_or(0) * 10,
            _ => fraction.parse::<u64>().unwrap_or(0),
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price::from_cents)
            .ok_or_else(|| anyhow!("Price out of range: {raw:?}"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.cents / 100;
        let cents = self.cents % 100;
        if cents == 0 {
            write!(f, "${dollars}")
        } else {
            write!(f, "${dollars}.{cents:02}")
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}
