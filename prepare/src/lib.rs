pub mod emit;
pub mod error;
pub mod output;
pub mod sort;
pub mod tables;

pub use error::PrepareError;
