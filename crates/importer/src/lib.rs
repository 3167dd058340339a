pub mod error;
pub mod seed;

pub use error::{ImporterError, Result};
pub use seed::{SeedFile, SeedLoader, SeedValidator, ValidationReport};
