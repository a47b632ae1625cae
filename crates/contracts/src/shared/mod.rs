pub mod validation;

pub use validation::ValidationErrors;
