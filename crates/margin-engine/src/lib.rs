//! Margin and shipping-rate resolution engine for cross-border
//! marketplace sellers.
//!
//! Deterministic financial formulas behind the pricing pages:
//!
//! - **Package**: volumetric and chargeable weight resolution
//! - **Shipping**: tariff catalog, eligibility checks, two-part fee
//!   formulas, quote ranking
//! - **Commission**: tiered platform commission by price band
//! - **Solvers**: max procurement cost at a price, and the inverse
//!   solve for the sale price required to hit a target margin
//!
//! The engine is pure: every function maps plain inputs to structured
//! outputs, with no I/O, no shared state, and no ambient
//! configuration. Reference data (tariffs, commission tables) is
//! loaded by the surrounding application and passed in per call. Every
//! amount is tagged with its currency; conversions happen only through
//! an explicitly supplied [`money::ExchangeRate`].
//!
//! # Example
//!
//! ```rust
//! use margin_engine::prelude::*;
//!
//! let package = PackageDimensions::new(30.0, 20.0, 10.0, 600.0);
//! let profile = PackageProfile::from_package(&package, 2000.0);
//!
//! let catalog = TariffCatalog::builtin();
//! let quotes = rank_tariffs(&catalog, &profile, false);
//! for quote in &quotes {
//!     match quote.eligibility.reason() {
//!         None => println!("{}: {}", quote.code, quote.cost),
//!         Some(reason) => println!("{}: unavailable ({})", quote.code, reason),
//!     }
//! }
//! ```

pub mod commission;
pub mod error;
pub mod ids;
pub mod money;
pub mod package;
pub mod shipping;
pub mod solver;

pub use error::EngineError;
pub use ids::*;
pub use money::{Amount, Currency, ExchangeRate};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::EngineError;
    pub use crate::ids::*;
    pub use crate::money::{Amount, Currency, ExchangeRate};

    // Package
    pub use crate::package::{chargeable_weight, volumetric_weight, PackageDimensions};

    // Shipping
    pub use crate::shipping::{
        rank_tariffs, shipping_cost, DimensionLimit, Eligibility, PackageProfile, ShippingTariff,
        TariffCatalog, TariffQuote,
    };

    // Commission
    pub use crate::commission::{CommissionCatalog, CommissionTable, PriceBand};

    // Solvers
    pub use crate::solver::{
        solve_max_cost, solve_price, MaxCost, MaxCostBreakdown, MaxCostInputs, PriceBreakdown,
        PriceInputs, PriceSolution,
    };
}
