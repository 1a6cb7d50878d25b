//! Shipping tariffs, eligibility, and cost calculation.

pub mod cost;
pub mod eligibility;
pub mod tariff;

pub use cost::{rank_tariffs, shipping_cost, TariffQuote};
pub use eligibility::{check, Eligibility, PackageProfile};
pub use tariff::{DimensionLimit, ShippingTariff, TariffCatalog};
