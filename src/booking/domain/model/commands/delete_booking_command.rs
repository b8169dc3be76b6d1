use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct DeleteBookingCommand {
    booking_id: Uuid,
}

impl DeleteBookingCommand {
    pub fn new(booking_id: Uuid) -> Self {
        Self { booking_id }
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }
}
