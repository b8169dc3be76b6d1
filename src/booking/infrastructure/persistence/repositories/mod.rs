pub mod postgres;
pub mod room_booking_repository;
