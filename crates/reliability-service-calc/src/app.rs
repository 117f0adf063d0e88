//! Router construction and the calculate handler.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use reliability_lib::ReliabilitySummary;

use crate::health::{health_live, health_ready};
use crate::metrics::{
    metrics_handler, record_calculation, record_calculation_failed, record_component_count,
};
use crate::middleware::{RequestId, TelemetryLayer};
use crate::problem::ProblemDetails;
use crate::request::{CalculateRequest, Validate};

/// Build the service router.
pub fn app() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(CorsLayer::permissive())
        .layer(TelemetryLayer)
}

/// Handle `POST /calculate` requests.
///
/// The happy path returns `200 OK` with the plain-text report. A body
/// that is not valid JSON for the request shape (including non-numeric
/// `mtbf`/`availability` values) returns `400 Bad Request` with an RFC
/// 9457 problem body.
async fn calculate(payload: Result<Json<CalculateRequest>, JsonRejection>) -> Response {
    let request_id = RequestId::generate();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(
                request_id = %request_id,
                error = %rejection,
                "rejecting undecodable request body"
            );
            record_calculation_failed("malformed_json");
            return ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
                .into_response();
        }
    };

    info!(
        request_id = %request_id,
        configuration = %request.configuration,
        components = request.components.len(),
        "handling calculate request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_calculation_failed("validation_error");
        return (*problem).into_response();
    }

    record_component_count(request.components.len());

    let summary = ReliabilitySummary::from_parts(request.configuration, request.components);

    record_calculation(summary.topology);

    info!(
        request_id = %request_id,
        topology = ?summary.topology,
        system_availability = summary.system_availability,
        uptime_hours = summary.uptime_hours,
        "calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary.render_plain(),
    )
        .into_response()
}
