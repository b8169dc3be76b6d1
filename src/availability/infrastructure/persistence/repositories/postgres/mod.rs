pub mod sqlx_availability_check_log_repository_impl;
pub mod sqlx_confirmed_booking_repository_impl;
