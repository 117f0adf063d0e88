//! Request types and validation for the calculate endpoint.

use serde::{Deserialize, Serialize};

use reliability_lib::Component;

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for computing the availability of a reliability network.
///
/// Both fields carry serde defaults: a missing `configuration` decodes
/// to the empty string and a missing `components` array to an empty
/// list, so partial input never fails the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Configuration label. `"series"` and `"parallel"` select a
    /// combination rule; any other value degrades the result to zero
    /// availability instead of failing the request.
    #[serde(default)]
    pub configuration: String,

    /// Components of the network, in order.
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Validate for CalculateRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        // JSON cannot encode NaN or infinities, so these checks never fire
        // for bodies that came through the JSON extractor. Out-of-range but
        // finite availabilities are accepted and flow through the formulas.
        for (index, component) in self.components.iter().enumerate() {
            if !component.mtbf.is_finite() {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("Component {index}: 'mtbf' must be a finite number"),
                    request_id,
                )));
            }

            if !component.availability.is_finite() {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("Component {index}: 'availability' must be a finite number"),
                    request_id,
                )));
            }
        }

        Ok(())
    }
}
