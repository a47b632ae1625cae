pub mod aggregate;

pub use aggregate::{GeneralSettings, GeneralSettingsId, GeneralSettingsUpdateForm};
