pub mod availability_rest_controller;
