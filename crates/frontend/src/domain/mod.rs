pub mod a001_whatsapp_integration;
pub mod a002_general_settings;
pub mod a003_reset_password_email;
