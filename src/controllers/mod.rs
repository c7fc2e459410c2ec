pub mod booking_controller;
pub mod bus_controller;
pub mod conductor_controller;
pub mod user_controller;
