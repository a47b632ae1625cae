use anyhow::Result;

use crate::domain::{a001_whatsapp_integration, a002_general_settings, a003_reset_password_email};
use crate::system::antiforgery;

/// Garante que cada tela de configuracao tenha exatamente um registro
/// para editar. Roda na subida do servidor, antes do bind.
pub async fn ensure_settings_exist() -> Result<()> {
    let integration = a001_whatsapp_integration::service::get_or_create().await?;
    tracing::info!(
        "WhatsApp integration settings ready (id {})",
        integration.to_string_id()
    );

    let general = a002_general_settings::service::get_or_create().await?;
    tracing::info!("General settings ready (id {})", general.to_string_id());

    let reset_email = a003_reset_password_email::service::get_or_create().await?;
    tracing::info!(
        "Reset password e-mail template ready (id {})",
        reset_email.to_string_id()
    );

    Ok(())
}

/// Gera e persiste o segredo anti-forgery na primeira subida
pub async fn ensure_antiforgery_secret() -> Result<()> {
    antiforgery::ensure_secret().await?;
    tracing::info!("Anti-forgery secret ready");
    Ok(())
}
