use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ConfirmedBookingResource {
    pub id: String,
    pub room: String,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    #[serde(rename = "type")]
    pub booking_type: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ConfirmedBookingListResource {
    pub count: usize,
    pub bookings: Vec<ConfirmedBookingResource>,
}
