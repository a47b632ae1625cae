pub mod aggregate;

pub use aggregate::{
    ConnectionTestResult, WhatsappIntegration, WhatsappIntegrationId, WhatsappIntegrationUpdateForm,
};
