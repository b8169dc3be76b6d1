pub mod booking_domain_error;
