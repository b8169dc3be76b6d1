pub mod availability_check_resource;
pub mod availability_decision_resource;
pub mod availability_error_response_resource;
pub mod availability_health_resource;
pub mod check_availability_request_resource;
pub mod confirmed_booking_resource;
