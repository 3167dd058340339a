mod loader;
mod models;
mod validator;

pub use loader::{ImportSummary, SeedLoader};
pub use models::{SeedCategory, SeedFile, SeedQuestion};
pub use validator::{SeedValidator, ValidationReport};
