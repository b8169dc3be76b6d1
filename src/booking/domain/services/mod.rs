pub mod booking_command_service;
pub mod booking_query_service;
