pub mod error;
pub mod health;
pub mod submissions;

pub use error::AppError;
