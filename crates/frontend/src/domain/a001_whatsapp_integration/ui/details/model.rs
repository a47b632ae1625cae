use contracts::domain::a001_whatsapp_integration::aggregate::{
    ConnectionTestResult, WhatsappIntegration, WhatsappIntegrationUpdateForm,
};
use contracts::system::antiforgery::AntiforgeryTokenResponse;
use gloo_net::http::Request;
use std::collections::BTreeMap;

const BASE_URL: &str = "/api/configuration/evolution";
const ANTIFORGERY_URL: &str = "/api/system/antiforgery";

/// Resultado de uma tentativa de salvar as credenciais.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// Servidor aceitou e devolveu o agregado atualizado.
    Saved(WhatsappIntegration),
    /// Servidor recusou os campos; mensagens por campo.
    Invalid(BTreeMap<String, String>),
    /// Token anti-forgery recusado; busque outro e tente de novo.
    TokenRejected,
}

#[derive(serde::Deserialize)]
struct ValidationErrorsBody {
    errors: BTreeMap<String, String>,
}

pub async fn fetch_settings() -> Result<WhatsappIntegration, String> {
    Request::get(BASE_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_antiforgery_token() -> Result<String, String> {
    let response: AntiforgeryTokenResponse = Request::get(ANTIFORGERY_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.token)
}

/// Corpo `application/x-www-form-urlencoded` da submissao.
pub fn encode_update_form(form: &WhatsappIntegrationUpdateForm) -> Result<String, String> {
    serde_qs::to_string(form).map_err(|e| e.to_string())
}

pub async fn save_settings(
    id: &str,
    form: &WhatsappIntegrationUpdateForm,
) -> Result<SaveOutcome, String> {
    let body = encode_update_form(form)?;

    let response = Request::post(&format!("{}/{}", BASE_URL, id))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match response.status() {
        403 => Ok(SaveOutcome::TokenRejected),
        422 => {
            let body: ValidationErrorsBody = response.json().await.map_err(|e| e.to_string())?;
            Ok(SaveOutcome::Invalid(body.errors))
        }
        _ if !response.ok() => Err(format!("HTTP {}", response.status())),
        _ => {
            let updated: WhatsappIntegration =
                response.json().await.map_err(|e| e.to_string())?;
            Ok(SaveOutcome::Saved(updated))
        }
    }
}

pub async fn test_connection(
    form: &WhatsappIntegrationUpdateForm,
) -> Result<ConnectionTestResult, String> {
    let body = encode_update_form(form)?;

    Request::post(&format!("{}/test", BASE_URL))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_body_carries_method_override_and_token() {
        let form = WhatsappIntegrationUpdateForm {
            method: Some("PUT".to_string()),
            antiforgery_token: "tok123".to_string(),
            base_url: "https://evo.example.com".to_string(),
            token: "B6D711FCDE4D4FD5936544120E713976".to_string(),
        };

        let body = encode_update_form(&form).unwrap();
        assert!(body.contains("_method=PUT"));
        assert!(body.contains("_token=tok123"));
        assert!(body.contains("base_url="));
        assert!(body.contains("token=B6D711FCDE4D4FD5936544120E713976"));
    }

    #[test]
    fn test_encoded_body_omits_method_when_unset() {
        let form = WhatsappIntegrationUpdateForm {
            method: None,
            antiforgery_token: "tok123".to_string(),
            base_url: "https://evo.example.com".to_string(),
            token: "abc".to_string(),
        };

        let body = encode_update_form(&form).unwrap();
        assert!(!body.contains("_method"));
    }
}
