pub mod antiforgery;

pub use antiforgery::AntiforgeryTokenResponse;
