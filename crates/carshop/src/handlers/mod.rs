pub mod cars;
pub mod error;
pub mod health;
pub mod orders;
pub mod people;

pub use error::AppError;
