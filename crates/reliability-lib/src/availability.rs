//! Closed-form availability reductions for series and parallel networks.
//!
//! Both reductions are total functions over an ordered component slice.
//! No bounds clamping is applied anywhere: negative or >100 availability
//! percentages propagate through the formulas unmodified.

use crate::model::{Component, Topology};

/// Hours in a non-leap year, used for uptime/downtime projections.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Availability of components wired in series, as a percentage.
///
/// The system operates only if every component is up, so the result is the
/// product of the per-component availabilities. An empty slice yields
/// `100.0` (the product of zero terms).
pub fn series_availability(components: &[Component]) -> f64 {
    let product: f64 = components
        .iter()
        .map(|component| component.availability / 100.0)
        .product();
    product * 100.0
}

/// Availability of components wired in parallel, as a percentage.
///
/// The system is down only if every component is down, so the result is
/// one minus the product of the per-component unavailabilities. An empty
/// slice yields `0.0`.
pub fn parallel_availability(components: &[Component]) -> f64 {
    let product: f64 = components
        .iter()
        .map(|component| 1.0 - component.availability / 100.0)
        .product();
    (1.0 - product) * 100.0
}

/// System availability under the given topology.
///
/// `None` means the configuration label was not recognized; the result
/// degrades to `0.0` rather than raising an error.
pub fn system_availability(topology: Option<Topology>, components: &[Component]) -> f64 {
    match topology {
        Some(Topology::Series) => series_availability(components),
        Some(Topology::Parallel) => parallel_availability(components),
        None => 0.0,
    }
}

/// Expected operational hours per year at the given availability percentage.
pub fn uptime_hours(availability: f64) -> f64 {
    availability / 100.0 * HOURS_PER_YEAR
}

/// Expected non-operational hours per year at the given availability percentage.
pub fn downtime_hours(availability: f64) -> f64 {
    HOURS_PER_YEAR - uptime_hours(availability)
}
