use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityCheckResource {
    pub id: String,
    pub room: String,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    #[serde(rename = "type")]
    pub booking_type: String,
    pub result: bool,
    pub reason: String,
    pub checked_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityCheckListResource {
    pub count: usize,
    pub checks: Vec<AvailabilityCheckResource>,
}
