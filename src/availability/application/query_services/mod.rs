pub mod availability_query_service_impl;
