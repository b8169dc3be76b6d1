use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Fields are optional at the wire level so the missing-field denial can
/// carry the domain's own message instead of a deserialization error.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateBookingRequestResource {
    pub room: Option<String>,
    pub date: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    #[serde(rename = "type")]
    pub booking_type: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
