//! Industry benchmarks and inflation context for a raise.
//!
//! [`BenchmarkLookup`] reads benchmark rows from storage and classifies a
//! raise against them; [`adjust_for_inflation`] classifies it against the
//! reference inflation rate. The [`market`] submodule holds the static
//! reference data published with the calculator.

mod compare;
mod inflation;
mod lookup;
pub mod market;

pub use compare::{ComparisonStatus, IndustryComparison, compare_with_benchmark};
pub use inflation::{InflationAdjustment, InflationStatus, adjust_for_inflation};
pub use lookup::BenchmarkLookup;
