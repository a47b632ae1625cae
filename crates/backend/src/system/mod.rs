pub mod antiforgery;
pub mod initialization;
pub mod middleware;
