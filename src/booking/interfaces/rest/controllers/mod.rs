pub mod booking_rest_controller;
