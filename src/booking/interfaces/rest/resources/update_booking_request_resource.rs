use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateBookingRequestResource {
    pub room: Option<String>,
    pub date: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    #[serde(rename = "type")]
    pub booking_type: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
