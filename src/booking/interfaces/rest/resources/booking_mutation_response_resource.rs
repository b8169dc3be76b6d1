use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::booking::interfaces::rest::resources::room_booking_resource::RoomBookingResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingMutationResponseResource {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<RoomBookingResource>,
}
