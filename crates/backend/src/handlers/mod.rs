pub mod a001_whatsapp_integration;
pub mod a002_general_settings;
pub mod a003_reset_password_email;
pub mod antiforgery;

use axum::http::Method;

use crate::shared::error::ApiError;

/// Confere o metodo efetivo de um envio de form: PUT direto, ou POST
/// carregando o override `_method=PUT` (comparado sem case)
pub(crate) fn ensure_update_method(
    method: &Method,
    form_method: Option<&str>,
) -> Result<(), ApiError> {
    if *method == Method::PUT {
        return Ok(());
    }
    if *method == Method::POST
        && form_method
            .map(|m| m.eq_ignore_ascii_case("put"))
            .unwrap_or(false)
    {
        return Ok(());
    }
    Err(ApiError::MethodNotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_put_needs_no_override() {
        assert!(ensure_update_method(&Method::PUT, None).is_ok());
        assert!(ensure_update_method(&Method::PUT, Some("PUT")).is_ok());
    }

    #[test]
    fn test_post_with_override_is_accepted() {
        assert!(ensure_update_method(&Method::POST, Some("PUT")).is_ok());
        assert!(ensure_update_method(&Method::POST, Some("put")).is_ok());
        assert!(ensure_update_method(&Method::POST, Some("Put")).is_ok());
    }

    #[test]
    fn test_post_without_override_is_rejected() {
        assert!(ensure_update_method(&Method::POST, None).is_err());
        assert!(ensure_update_method(&Method::POST, Some("")).is_err());
        assert!(ensure_update_method(&Method::POST, Some("PATCH")).is_err());
    }

    #[test]
    fn test_other_methods_are_rejected() {
        assert!(ensure_update_method(&Method::GET, Some("PUT")).is_err());
        assert!(ensure_update_method(&Method::DELETE, None).is_err());
    }
}
