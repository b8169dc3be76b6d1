pub mod availability_decision;
pub mod availability_domain_error;
pub mod booking_type;
