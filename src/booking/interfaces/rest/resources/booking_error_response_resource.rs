use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `reason` carries the Authority's denial verbatim; `error` everything
/// else; `details` the upstream body when the Authority answered non-2xx.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingErrorResponseResource {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
