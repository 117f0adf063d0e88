//! Reliability calculator HTTP microservice.
//!
//! A stateless service that accepts a description of a reliability network
//! (a "series" or "parallel" configuration plus a list of components) and
//! returns a plain-text report with the computed system availability and
//! the implied uptime/downtime per year. All business logic resides in
//! `reliability-lib`; this crate provides only HTTP glue.
//!
//! # Endpoints
//!
//! - `POST /calculate` - Compute system availability for a network
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `SERVICE_HOST` - Bind address (default: 127.0.0.1)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

#![deny(warnings)]

mod app;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;

pub use app::app;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_calculation, record_calculation_failed,
    record_component_count, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, RequestId, TelemetryLayer};
pub use problem::{ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST};
pub use request::{CalculateRequest, Validate};
