pub mod error;
pub mod moeda;

pub use error::AppError;
