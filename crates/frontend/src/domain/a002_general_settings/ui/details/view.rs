use crate::shared::date_utils::format_datetime;
use crate::shared::toast::ToastService;
use contracts::domain::a002_general_settings::aggregate::{
    GeneralSettings, GeneralSettingsUpdateForm,
};
use contracts::domain::common::AggregateId;
use contracts::system::antiforgery::AntiforgeryTokenResponse;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

const BASE_URL: &str = "/api/configuration/general";
const ANTIFORGERY_URL: &str = "/api/system/antiforgery";

#[component]
pub fn GeneralSettingsDetails() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    // RwSignal para os campos (binding de duas vias com o Thaw)
    let company_name = RwSignal::new(String::new());
    let timezone = RwSignal::new(String::new());

    let (record_id, set_record_id) = signal::<Option<String>>(None);
    let (antiforgery_token, set_antiforgery_token) = signal(String::new());
    let (updated_at, set_updated_at) = signal::<Option<String>>(None);
    let (field_errors, set_field_errors) = signal::<BTreeMap<String, String>>(BTreeMap::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    // Carga inicial: dados gravados + token anti-forgery
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_settings().await {
                Ok(settings) => {
                    company_name.set(settings.company_name.clone());
                    timezone.set(settings.timezone.clone());
                    set_record_id.set(Some(settings.base.id.as_string()));
                    set_updated_at.set(Some(
                        settings
                            .base
                            .metadata
                            .updated_at
                            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                    ));
                }
                Err(e) => set_error.set(Some(format!("Falha ao carregar: {}", e))),
            }
            match fetch_antiforgery_token().await {
                Ok(token) => set_antiforgery_token.set(token),
                Err(e) => {
                    set_error.set(Some(format!("Falha ao obter o token do formulário: {}", e)))
                }
            }
        });
    });

    let handle_save = move |_: leptos::ev::MouseEvent| {
        let Some(id) = record_id.get() else {
            set_error.set(Some("As configurações ainda não foram carregadas".to_string()));
            return;
        };

        let form = GeneralSettingsUpdateForm {
            method: Some("PUT".to_string()),
            antiforgery_token: antiforgery_token.get(),
            company_name: company_name.get(),
            timezone: timezone.get(),
        };

        set_is_saving.set(true);
        set_error.set(None);
        set_field_errors.set(BTreeMap::new());

        wasm_bindgen_futures::spawn_local(async move {
            match save_settings(&id, &form).await {
                Ok(SaveOutcome::Saved(settings)) => {
                    set_updated_at.set(Some(
                        settings
                            .base
                            .metadata
                            .updated_at
                            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                    ));
                    toasts.success("Configurações salvas com sucesso");
                }
                Ok(SaveOutcome::Invalid(errors)) => set_field_errors.set(errors),
                Ok(SaveOutcome::TokenRejected) => {
                    if let Ok(token) = fetch_antiforgery_token().await {
                        set_antiforgery_token.set(token);
                    }
                    set_error.set(Some(
                        "O token do formulário expirou. Tente salvar novamente.".to_string(),
                    ));
                }
                Err(e) => set_error.set(Some(format!("Falha ao salvar: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="detail-form general-settings-details">
            {move || error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="form__group">
                <label class="form__label">{"Nome da empresa"}</label>
                <Input value=company_name placeholder="Ex.: ACME Comércio Ltda" />
                {move || field_errors.get().get("company_name").cloned().map(|m| {
                    view! { <div class="form__error">{m}</div> }
                })}
            </div>

            <div class="form__group">
                <label class="form__label">{"Fuso horário"}</label>
                <Input value=timezone placeholder="America/Sao_Paulo" />
            </div>

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=Signal::derive(move || {
                        is_saving.get() || company_name.get().trim().is_empty()
                    })
                >
                    {move || if is_saving.get() { "Salvando..." } else { "Salvar" }}
                </Button>
            </div>

            {move || updated_at.get().map(|at| view! {
                <div class="form__footer">
                    {format!("Atualizado em {}", format_datetime(&at))}
                </div>
            })}
        </div>
    }
}

enum SaveOutcome {
    Saved(GeneralSettings),
    Invalid(BTreeMap<String, String>),
    TokenRejected,
}

async fn fetch_settings() -> Result<GeneralSettings, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = BASE_URL.to_string();
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: GeneralSettings = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn fetch_antiforgery_token() -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = ANTIFORGERY_URL.to_string();
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: AntiforgeryTokenResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data.token)
}

async fn save_settings(
    id: &str,
    form: &GeneralSettingsUpdateForm,
) -> Result<SaveOutcome, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let body = serde_qs::to_string(form).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = format!("{}/{}", BASE_URL, id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 403 {
        return Ok(SaveOutcome::TokenRejected);
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if resp.status() == 422 {
        #[derive(serde::Deserialize)]
        struct ValidationErrorsBody {
            errors: BTreeMap<String, String>,
        }
        let body: ValidationErrorsBody = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
        return Ok(SaveOutcome::Invalid(body.errors));
    }
    if !resp.ok() {
        return Err(format!("HTTP {}: {}", resp.status(), text));
    }

    let data: GeneralSettings = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(SaveOutcome::Saved(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    // O backend serve o bundle compilado, entao as chamadas de API sao
    // relativas a mesma origem.
    #[test]
    fn test_endpoints_are_same_origin_relative_paths() {
        assert!(BASE_URL.starts_with("/api/"));
        assert!(ANTIFORGERY_URL.starts_with("/api/"));
    }
}
