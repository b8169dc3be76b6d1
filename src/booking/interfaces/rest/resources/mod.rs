pub mod authority_status_resource;
pub mod booking_error_response_resource;
pub mod booking_health_resource;
pub mod booking_mutation_response_resource;
pub mod create_booking_request_resource;
pub mod room_booking_resource;
pub mod update_booking_request_resource;
