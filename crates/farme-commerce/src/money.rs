//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency. The storefront
//! prices in Vietnamese dong, which has no minor unit, so a VND amount is a
//! whole number of dong.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "đ",
            Currency::USD => "$",
        }
    }

    /// Whether the symbol is written after the amount ("25.000đ").
    pub fn symbol_trails(&self) -> bool {
        matches!(self, Currency::VND)
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
        }
    }

    /// Thousands separator used when displaying amounts.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::VND => '.',
            Currency::USD => ',',
        }
    }

    /// Separator between whole units and the fraction.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::VND => ',',
            Currency::USD => '.',
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a dong amount.
    pub fn vnd(amount: i64) -> Self {
        Self::new(amount, Currency::VND)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None if any value is in another currency or the sum overflows.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format as a display string (e.g., "25.000đ", "$12.50").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let magnitude = self.amount.unsigned_abs();
        let units = magnitude / divisor as u64;
        let fraction = magnitude % divisor as u64;

        let mut digits = group_digits(units, self.currency.group_separator());
        if places > 0 {
            digits.push(self.currency.decimal_separator());
            digits.push_str(&format!("{:0width$}", fraction, width = places as usize));
        }

        let sign = if self.amount < 0 { "-" } else { "" };
        let symbol = self.currency.symbol();
        if self.currency.symbol_trails() {
            format!("{sign}{digits}{symbol}")
        } else {
            format!("{sign}{symbol}{digits}")
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
