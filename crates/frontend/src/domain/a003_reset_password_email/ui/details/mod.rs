mod view;

pub use view::ResetPasswordEmailDetails;
