//! Structured calculation summaries and plain-text report rendering.

use std::fmt::Write;

use serde::Serialize;
use tracing::debug;

use crate::availability::{downtime_hours, system_availability, uptime_hours};
use crate::model::{Component, Topology};

/// Structured result of one availability calculation.
///
/// Holds the caller's raw configuration label alongside the topology it
/// resolved to (if any), the components in input order, and the derived
/// system-level figures. Serializable so consumers can log or re-export
/// the summary as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilitySummary {
    /// Raw configuration label as supplied by the caller.
    pub configuration: String,
    /// Topology resolved from the label, if recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
    /// Components in input order.
    pub components: Vec<Component>,
    /// System availability percentage under the resolved topology.
    pub system_availability: f64,
    /// Expected operational hours per year.
    pub uptime_hours: f64,
    /// Expected non-operational hours per year.
    pub downtime_hours: f64,
}

impl ReliabilitySummary {
    /// Build a summary from a raw configuration label and decoded components.
    ///
    /// An unrecognized label is not an error: the topology stays `None` and
    /// the system availability degrades to `0.0`.
    pub fn from_parts(configuration: impl Into<String>, components: Vec<Component>) -> Self {
        let configuration = configuration.into();
        let topology = Topology::parse(&configuration);
        let availability = system_availability(topology, &components);

        debug!(
            configuration = %configuration,
            topology = ?topology,
            components = components.len(),
            system_availability = availability,
            "computed system availability"
        );

        Self {
            configuration,
            topology,
            components,
            system_availability: availability,
            uptime_hours: uptime_hours(availability),
            downtime_hours: downtime_hours(availability),
        }
    }

    /// Render the plain-text report.
    ///
    /// Fixed order: configuration label, component count, one block per
    /// component (input order), the topology heading when the label was
    /// recognized, then the system availability and the uptime/downtime
    /// projection. Numbers render with `f64` `Display`, no enforced
    /// rounding.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Configuration: {}", self.configuration);
        let _ = writeln!(buffer, "Number of components: {}", self.components.len());
        let _ = writeln!(buffer);

        for component in &self.components {
            let _ = writeln!(buffer, "{}", component.name);
            let _ = writeln!(buffer, "MTBF: {}", component.mtbf);
            let _ = writeln!(buffer, "Availability: {}%", component.availability);
            let _ = writeln!(buffer);
        }

        if let Some(topology) = self.topology {
            let _ = writeln!(buffer, "{}", topology.heading());
        }

        let _ = writeln!(buffer, "System Availability: {}%", self.system_availability);
        let _ = writeln!(buffer, "Uptime per year: {}", self.uptime_hours);
        let _ = writeln!(buffer, "Downtime per year: {}", self.downtime_hours);

        buffer
    }
}
