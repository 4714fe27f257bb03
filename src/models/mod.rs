pub mod movie;
pub mod premiere;
pub mod theater;

pub use movie::Movie;
pub use premiere::{Premiere, SeatStatus};
pub use theater::Theater;
