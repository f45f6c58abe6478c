//! Pay Raise Engine
//!
//! This crate calculates pay raises across pay periods, compares raises with
//! industry benchmarks and stores submitted calculations, either in memory or
//! in PostgreSQL. The [`api`] module exposes everything over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod benchmark;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
