pub mod availability_command_service_impl;
