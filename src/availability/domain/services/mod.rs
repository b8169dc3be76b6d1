pub mod availability_command_service;
pub mod availability_query_service;
