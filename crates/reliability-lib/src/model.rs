//! Component and topology types for reliability networks.

use serde::{Deserialize, Serialize};

/// One element of a reliability network.
///
/// Every field carries a serde default so a partially specified component
/// decodes to the empty string / `0.0` instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Display label. Not required to be unique.
    #[serde(default)]
    pub name: String,

    /// Mean time between failures, in hours (unit implied by the caller).
    #[serde(default)]
    pub mtbf: f64,

    /// Availability percentage, nominally 0-100. Out-of-range values are
    /// accepted and flow through the reductions unmodified.
    #[serde(default)]
    pub availability: f64,
}

impl Component {
    /// Construct a component from its three fields.
    pub fn new(name: impl Into<String>, mtbf: f64, availability: f64) -> Self {
        Self {
            name: name.into(),
            mtbf,
            availability,
        }
    }
}

/// Recognized combination rules for a reliability network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// The system is up only if every component is up.
    Series,
    /// The system is up if at least one component is up.
    Parallel,
}

impl Topology {
    /// Parse a configuration label.
    ///
    /// Only the exact lowercase labels `"series"` and `"parallel"` are
    /// recognized. Anything else, including the empty string, is `None`;
    /// unknown labels are tolerated rather than rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "series" => Some(Topology::Series),
            "parallel" => Some(Topology::Parallel),
            _ => None,
        }
    }

    /// Heading printed in the plain-text report for this topology.
    pub fn heading(self) -> &'static str {
        match self {
            Topology::Series => "Series system",
            Topology::Parallel => "Parallel system",
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Topology::Series => "series",
            Topology::Parallel => "parallel",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_lowercase_labels() {
        assert_eq!(Topology::parse("series"), Some(Topology::Series));
        assert_eq!(Topology::parse("parallel"), Some(Topology::Parallel));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(Topology::parse(""), None);
        assert_eq!(Topology::parse("Series"), None);
        assert_eq!(Topology::parse("PARALLEL"), None);
        assert_eq!(Topology::parse("foo"), None);
    }

    #[test]
    fn topology_headings() {
        assert_eq!(Topology::Series.heading(), "Series system");
        assert_eq!(Topology::Parallel.heading(), "Parallel system");
    }

    #[test]
    fn component_deserializes_with_all_fields() {
        let json = r#"{"name":"PSU","mtbf":5000,"availability":99.9}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.name, "PSU");
        assert_eq!(component.mtbf, 5000.0);
        assert_eq!(component.availability, 99.9);
    }

    #[test]
    fn component_missing_fields_default_to_zero() {
        let component: Component = serde_json::from_str("{}").unwrap();
        assert_eq!(component.name, "");
        assert_eq!(component.mtbf, 0.0);
        assert_eq!(component.availability, 0.0);
    }

    #[test]
    fn component_non_numeric_field_is_a_decode_error() {
        let json = r#"{"name":"PSU","mtbf":"often","availability":99.9}"#;
        assert!(serde_json::from_str::<Component>(json).is_err());
    }

    #[test]
    fn topology_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Topology::Series).unwrap(),
            "\"series\""
        );
        assert_eq!(Topology::Parallel.to_string(), "parallel");
    }
}
