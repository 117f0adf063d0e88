use reliability_lib::{Component, ReliabilitySummary, Topology, HOURS_PER_YEAR};

/// Representative power-network sample set.
fn sample_network() -> Vec<Component> {
    vec![
        Component::new("Generator", 8300.0, 98.0),
        Component::new("Transformer", 8700.0, 99.5),
        Component::new("Transmission Line", 8600.0, 99.5),
        Component::new("Distribution", 8650.0, 99.0),
    ]
}

#[test]
fn sample_network_series_availability() {
    let summary = ReliabilitySummary::from_parts("series", sample_network());

    assert_eq!(summary.topology, Some(Topology::Series));
    let expected = 0.98 * 0.995 * 0.995 * 0.99 * 100.0;
    assert!((summary.system_availability - expected).abs() < 1e-9);
}

#[test]
fn sample_network_parallel_availability() {
    let summary = ReliabilitySummary::from_parts("parallel", sample_network());

    let expected = (1.0 - 0.02 * 0.005 * 0.005 * 0.01) * 100.0;
    assert!((summary.system_availability - expected).abs() < 1e-9);
}

#[test]
fn sample_network_report_lists_every_component() {
    let report = ReliabilitySummary::from_parts("series", sample_network()).render_plain();

    assert!(report.contains("Configuration: series"));
    assert!(report.contains("Number of components: 4"));
    assert!(report.contains("Generator"));
    assert!(report.contains("MTBF: 8300"));
    assert!(report.contains("Transformer"));
    assert!(report.contains("Transmission Line"));
    assert!(report.contains("Distribution"));
    assert!(report.contains("Availability: 99.5%"));
    assert!(report.contains("Series system"));
}

#[test]
fn sample_network_report_preserves_input_order() {
    let report = ReliabilitySummary::from_parts("series", sample_network()).render_plain();

    let generator = report.find("Generator").expect("Generator listed");
    let transformer = report.find("Transformer").expect("Transformer listed");
    let line = report.find("Transmission Line").expect("line listed");
    let distribution = report.find("Distribution").expect("Distribution listed");
    assert!(generator < transformer && transformer < line && line < distribution);
}

#[test]
fn uptime_and_downtime_always_partition_the_year() {
    for configuration in ["series", "parallel", "foo", ""] {
        let summary = ReliabilitySummary::from_parts(configuration, sample_network());
        assert!((summary.uptime_hours + summary.downtime_hours - HOURS_PER_YEAR).abs() < 1e-9);
        assert!(
            (summary.uptime_hours - summary.system_availability / 100.0 * HOURS_PER_YEAR).abs()
                < 1e-9
        );
    }
}
