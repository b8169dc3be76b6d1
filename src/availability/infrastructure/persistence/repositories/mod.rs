pub mod availability_check_log_repository;
pub mod confirmed_booking_repository;
pub mod postgres;
