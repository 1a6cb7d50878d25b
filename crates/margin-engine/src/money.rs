//! Currency-tagged amounts.
//!
//! The engine computes everything in major currency units (yuan, not
//! fen). Call sites that hold minor-unit integers convert once at the
//! boundary; tagging every amount with its [`Currency`] keeps
//! procurement-side and destination-side figures from mixing silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Chinese yuan, the procurement side.
    #[default]
    CNY,
    /// Russian ruble, the destination marketplace side.
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "CNY").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CNY => "CNY",
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "¥").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::CNY => "\u{00a5}",
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CNY" | "RMB" => Some(Currency::CNY),
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in major units of a currency.
///
/// Stored as `f64` because tariff rate fees are fractional per-gram
/// values (e.g. ¥0.025/g) and solver outputs reconcile at 1e-6
/// relative tolerance, well below minor-unit resolution. Rounding is
/// a display concern and never happens inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Amount {
    /// Value in major currency units.
    pub value: f64,
    /// The currency.
    pub currency: Currency,
}

impl Amount {
    /// Create a new amount.
    pub fn new(value: f64, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Try to add another amount, returning `None` if currencies differ.
    pub fn try_add(&self, other: &Amount) -> Option<Amount> {
        if self.currency != other.currency {
            return None;
        }
        Some(Amount::new(self.value + other.value, self.currency))
    }

    /// Try to subtract another amount, returning `None` if currencies differ.
    pub fn try_subtract(&self, other: &Amount) -> Option<Amount> {
        if self.currency != other.currency {
            return None;
        }
        Some(Amount::new(self.value - other.value, self.currency))
    }

    /// Multiply by a scalar factor.
    pub fn scale(&self, factor: f64) -> Amount {
        Amount::new(self.value * factor, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Amount {
        self.scale(percent / 100.0)
    }

    /// Format as a display string (e.g., "¥38.00"), rounded to two places.
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// An exchange rate between two currencies.
///
/// Supplied by the caller per calculation; the engine never fetches or
/// caches rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Units of `to` per one unit of `from`.
    pub rate: f64,
}

impl ExchangeRate {
    /// Create a new exchange rate.
    pub fn new(from: Currency, to: Currency, rate: f64) -> Self {
        Self { from, to, rate }
    }

    /// Convert an amount, returning `None` if its currency is not `from`.
    pub fn convert(&self, amount: &Amount) -> Option<Amount> {
        if amount.currency != self.from {
            return None;
        }
        Some(Amount::new(amount.value * self.rate, self.to))
    }
}
