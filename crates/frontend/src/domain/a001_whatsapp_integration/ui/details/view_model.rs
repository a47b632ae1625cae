use super::model;
use super::model::SaveOutcome;
use contracts::domain::a001_whatsapp_integration::aggregate::{
    ConnectionTestResult, WhatsappIntegration, WhatsappIntegrationUpdateForm,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// ViewModel do formulario da Evolution API
///
/// Uses simplified MVVM pattern:
/// - Form data stored directly as WhatsappIntegrationUpdateForm
/// - No update_* methods - use form.update() directly in view
/// - Commands for complex operations (load, save, test)
#[derive(Clone)]
pub struct WhatsappIntegrationDetailsViewModel {
    pub record_id: RwSignal<Option<String>>,
    pub form: RwSignal<WhatsappIntegrationUpdateForm>,
    pub field_errors: RwSignal<BTreeMap<String, String>>,
    pub error: RwSignal<Option<String>>,
    pub updated_at: RwSignal<Option<String>>,
    pub test_result: RwSignal<Option<ConnectionTestResult>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub is_testing: RwSignal<bool>,
}

impl WhatsappIntegrationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            record_id: RwSignal::new(None),
            form: RwSignal::new(WhatsappIntegrationUpdateForm::default()),
            field_errors: RwSignal::new(BTreeMap::new()),
            error: RwSignal::new(None),
            updated_at: RwSignal::new(None),
            test_result: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            is_testing: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.base_url.trim().is_empty() && !f.token.trim().is_empty()
        }
    }

    /// Busca as credenciais gravadas e um token anti-forgery novo
    pub fn load_command(&self) {
        self.is_loading.set(true);

        let record_id = self.record_id;
        let form = self.form;
        let updated_at = self.updated_at;
        let error = self.error;
        let is_loading = self.is_loading;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_settings().await {
                Ok(aggregate) => {
                    record_id.set(Some(aggregate.base.id.as_string()));
                    updated_at.set(Some(
                        aggregate
                            .base
                            .metadata
                            .updated_at
                            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                    ));
                    form.update(|f| prefill(f, &aggregate));
                }
                Err(e) => error.set(Some(format!("Falha ao carregar: {}", e))),
            }

            match model::fetch_antiforgery_token().await {
                Ok(token) => form.update(|f| f.antiforgery_token = token),
                Err(e) => {
                    error.set(Some(format!("Falha ao obter o token do formulário: {}", e)))
                }
            }

            is_loading.set(false);
        });
    }

    /// Envia o form de atualizacao com o override `_method=PUT`
    pub fn save_command(&self, on_saved: Callback<()>) {
        let Some(id) = self.record_id.get() else {
            self.error
                .set(Some("As configurações ainda não foram carregadas".to_string()));
            return;
        };

        let mut current = self.form.get();
        current.method = Some("PUT".to_string());

        self.is_saving.set(true);
        self.error.set(None);
        self.field_errors.set(BTreeMap::new());

        let form = self.form;
        let field_errors = self.field_errors;
        let error = self.error;
        let updated_at = self.updated_at;
        let is_saving = self.is_saving;

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_settings(&id, &current).await {
                Ok(outcome) => {
                    form.set(form_after_save(current, &outcome));
                    match outcome {
                        SaveOutcome::Saved(aggregate) => {
                            updated_at.set(Some(
                                aggregate
                                    .base
                                    .metadata
                                    .updated_at
                                    .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                            ));
                            on_saved.run(());
                        }
                        SaveOutcome::Invalid(errors) => field_errors.set(errors),
                        SaveOutcome::TokenRejected => {
                            // Token expirado; emite outro para a proxima tentativa
                            if let Ok(token) = model::fetch_antiforgery_token().await {
                                form.update(|f| f.antiforgery_token = token);
                            }
                            error.set(Some(
                                "O token do formulário expirou. Tente salvar novamente."
                                    .to_string(),
                            ));
                        }
                    }
                }
                Err(e) => error.set(Some(format!("Falha ao salvar: {}", e))),
            }
            is_saving.set(false);
        });
    }

    /// Testa as credenciais digitadas, sem grava-las
    pub fn test_command(&self) {
        self.is_testing.set(true);
        self.test_result.set(None);
        self.error.set(None);

        let current = self.form.get();
        let is_testing = self.is_testing;
        let test_result = self.test_result;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::test_connection(&current).await {
                Ok(result) => {
                    test_result.set(Some(result));
                    is_testing.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Falha no teste: {}", e)));
                    is_testing.set(false);
                }
            }
        });
    }
}

/// Preenche os campos editaveis a partir do agregado buscado, preservando
/// o token anti-forgery ja emitido para o form.
fn prefill(form: &mut WhatsappIntegrationUpdateForm, aggregate: &WhatsappIntegration) {
    form.base_url = aggregate.base_url.clone();
    form.token = aggregate.token.clone();
}

/// Valores do form apos um save: so o sucesso substitui os campos pelos
/// dados devolvidos; recusas (422/403) mantem o que foi digitado, para
/// reexibicao ao lado das mensagens de erro.
fn form_after_save(
    typed: WhatsappIntegrationUpdateForm,
    outcome: &SaveOutcome,
) -> WhatsappIntegrationUpdateForm {
    match outcome {
        SaveOutcome::Saved(aggregate) => {
            let mut form = typed;
            prefill(&mut form, aggregate);
            form
        }
        SaveOutcome::Invalid(_) | SaveOutcome::TokenRejected => typed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed_form() -> WhatsappIntegrationUpdateForm {
        WhatsappIntegrationUpdateForm {
            method: Some("PUT".to_string()),
            antiforgery_token: "tok123".to_string(),
            base_url: "ftp://digitado.example.com".to_string(),
            token: "token-digitado".to_string(),
        }
    }

    #[test]
    fn test_form_prefills_from_fetched_settings() {
        let aggregate = WhatsappIntegration::new_for_insert(
            "https://evo.example.com".to_string(),
            "token-gravado".to_string(),
        );
        let mut form = WhatsappIntegrationUpdateForm {
            antiforgery_token: "tok123".to_string(),
            ..Default::default()
        };

        prefill(&mut form, &aggregate);

        assert_eq!(form.base_url, "https://evo.example.com");
        assert_eq!(form.token, "token-gravado");
        // O token do form nao vem do agregado
        assert_eq!(form.antiforgery_token, "tok123");
    }

    #[test]
    fn test_rejected_submission_keeps_typed_values() {
        let typed = typed_form();

        let mut errors = std::collections::BTreeMap::new();
        errors.insert("base_url".to_string(), "esquema inválido".to_string());
        let after = form_after_save(typed.clone(), &SaveOutcome::Invalid(errors));
        assert_eq!(after, typed);

        let after = form_after_save(typed.clone(), &SaveOutcome::TokenRejected);
        assert_eq!(after, typed);
    }

    #[test]
    fn test_successful_save_reflects_returned_settings() {
        let saved = WhatsappIntegration::new_for_insert(
            "https://evo.example.com".to_string(),
            "token-normalizado".to_string(),
        );
        let after = form_after_save(typed_form(), &SaveOutcome::Saved(saved));

        assert_eq!(after.base_url, "https://evo.example.com");
        assert_eq!(after.token, "token-normalizado");
    }
}
