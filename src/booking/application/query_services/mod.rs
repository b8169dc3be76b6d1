pub mod booking_query_service_impl;
