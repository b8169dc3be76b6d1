use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every field is optional at the wire level: a request with missing fields
/// must still reach the decision ladder so the denial lands in the audit log.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CheckAvailabilityRequestResource {
    pub room: Option<String>,
    pub date: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    #[serde(rename = "type")]
    pub booking_type: Option<String>,
}
