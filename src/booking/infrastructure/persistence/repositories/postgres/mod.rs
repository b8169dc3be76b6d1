pub mod sqlx_room_booking_repository_impl;
