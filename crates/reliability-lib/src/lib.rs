//! Reliability network availability calculations.
//!
//! This crate exposes the component model for series/parallel reliability
//! networks, the closed-form availability reductions over them, and the
//! plain-text report renderer. Higher-level consumers (the HTTP service)
//! should only depend on the items exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod availability;
pub mod model;
pub mod report;

pub use availability::{
    downtime_hours, parallel_availability, series_availability, system_availability, uptime_hours,
    HOURS_PER_YEAR,
};
pub use model::{Component, Topology};
pub use report::ReliabilitySummary;
