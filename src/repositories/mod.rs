pub mod booking_repository;
pub mod bus_repository;
pub mod conductor_repository;
pub mod user_repository;
