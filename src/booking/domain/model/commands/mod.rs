pub mod create_booking_command;
pub mod delete_booking_command;
pub mod update_booking_command;
