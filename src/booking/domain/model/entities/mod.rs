pub mod room_booking;
