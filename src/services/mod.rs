pub mod booking;
pub mod demo;

pub use booking::BookingService;
