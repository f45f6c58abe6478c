//! Calculation logic for the Pay Raise Engine.
//!
//! This module contains the raise calculation itself, the marginal tax rate
//! estimate used for tax-adjusted increases, and the compound projection
//! attached to percentage raises.

mod projection;
mod raise;
mod tax;

pub use projection::{DEFAULT_PROJECTION_YEARS, compound_projection};
pub use raise::calculate;
pub use tax::estimate_tax_rate;
