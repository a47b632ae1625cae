mod view;

pub use view::GeneralSettingsDetails;
