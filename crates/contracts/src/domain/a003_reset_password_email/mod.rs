pub mod aggregate;

pub use aggregate::{ResetPasswordEmail, ResetPasswordEmailId, ResetPasswordEmailUpdateForm};
