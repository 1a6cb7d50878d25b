//! Engine error types.
//!
//! Only genuinely unresolvable conditions are errors. Normal
//! calculation states (not yet computable, margin infeasible, tariff
//! ineligible) are expressed as outcome variants on the result types,
//! never as errors.

use crate::money::Currency;
use thiserror::Error;

/// Errors that can occur during margin and shipping calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Amounts in different currencies were combined without a conversion.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    /// A cross-currency shipping lookup needs a rate the caller did not supply.
    #[error("Missing exchange rate from {from} to {to}")]
    MissingExchangeRate { from: Currency, to: Currency },

    /// No commission table exists for the category; the caller decides a fallback.
    #[error("No commission table for category: {0}")]
    MissingCommissionTable(String),

    /// A door-delivery fee formula string could not be parsed.
    #[error("Malformed door-delivery fee formula: {0:?}")]
    BadFeeFormula(String),

    /// Unknown tariff code.
    #[error("Tariff not found: {0}")]
    TariffNotFound(String),
}
