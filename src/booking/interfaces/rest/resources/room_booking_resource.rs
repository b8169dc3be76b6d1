use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::booking::domain::model::entities::room_booking::RoomBooking;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoomBookingResource {
    pub id: String,
    pub room: String,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    #[serde(rename = "type")]
    pub booking_type: String,
    pub email: String,
    pub created_at: String,
}

impl From<&RoomBooking> for RoomBookingResource {
    fn from(booking: &RoomBooking) -> Self {
        Self {
            id: booking.id().to_string(),
            room: booking.room().to_string(),
            date: booking.date().format("%Y-%m-%d").to_string(),
            time_start: booking.time_start().format("%H:%M").to_string(),
            time_end: booking.time_end().format("%H:%M").to_string(),
            booking_type: booking.booking_type().to_string(),
            email: booking.user_email().to_string(),
            created_at: booking.created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoomBookingListResource {
    pub count: usize,
    pub bookings: Vec<RoomBookingResource>,
}
