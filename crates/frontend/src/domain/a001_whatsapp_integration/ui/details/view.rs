use super::view_model::WhatsappIntegrationDetailsViewModel;
use crate::shared::date_utils::format_datetime;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn WhatsappIntegrationDetails() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = WhatsappIntegrationDetailsViewModel::new();

    vm.load_command();

    let on_saved = Callback::new(move |_: ()| {
        toasts.success("Configurações salvas com sucesso");
    });

    // Create all clones needed before view! macro
    let vm_test_click = vm.clone();
    let vm_test_disabled = vm.clone();
    let vm_test_label = vm.clone();
    let vm_save_click = vm.clone();
    let vm_save_disabled = vm.clone();
    let vm_error = vm.clone();
    let vm_loading = vm.clone();
    let vm_url_value = vm.clone();
    let vm_url_input = vm.clone();
    let vm_url_error = vm.clone();
    let vm_token_value = vm.clone();
    let vm_token_input = vm.clone();
    let vm_token_error = vm.clone();
    let vm_test_result = vm.clone();
    let vm_updated_at = vm.clone();

    view! {
        <div class="detail-form whatsapp-integration-details">
            <div class="form-actions-top">
                <button
                    class="button button--secondary"
                    on:click=move |_| vm_test_click.test_command()
                    disabled=move || vm_test_disabled.is_testing.get()
                >
                    {move || if vm_test_label.is_testing.get() { "Testando..." } else { "Testar conexão" }}
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm_save_click.save_command(on_saved)
                    disabled=move || {
                        vm_save_disabled.is_saving.get() || !vm_save_disabled.is_form_valid()()
                    }
                >
                    "Salvar"
                </button>
            </div>

            {move || vm_error.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <Show when=move || vm_loading.is_loading.get()>
                <div class="info-box">"Carregando..."</div>
            </Show>

            <div class="form__group">
                <label class="form__label" for="base_url">{"URL da API"}</label>
                <input
                    class="form__input"
                    type="url"
                    id="base_url"
                    name="base_url"
                    prop:value=move || vm_url_value.form.get().base_url
                    on:input=move |ev| {
                        vm_url_input.form.update(|f| f.base_url = event_target_value(&ev));
                    }
                    placeholder="https://evolution.seudominio.com.br"
                />
                {move || vm_url_error.field_errors.get().get("base_url").cloned().map(|m| {
                    view! { <div class="form__error">{m}</div> }
                })}
            </div>

            <div class="form__group">
                <label class="form__label" for="token">{"Token Global"}</label>
                <input
                    class="form__input"
                    type="text"
                    id="token"
                    name="token"
                    prop:value=move || vm_token_value.form.get().token
                    on:input=move |ev| {
                        vm_token_input.form.update(|f| f.token = event_target_value(&ev));
                    }
                    placeholder="Token global da Evolution API"
                />
                {move || vm_token_error.field_errors.get().get("token").cloned().map(|m| {
                    view! { <div class="form__error">{m}</div> }
                })}
            </div>

            {move || {
                vm_test_result.test_result
                    .get()
                    .map(|result| {
                        let class = if result.success {
                            "info-box text-success"
                        } else {
                            "warning-box text-error"
                        };
                        let mark = if result.success { "✓" } else { "✗" };
                        view! {
                            <div class=class>
                                {format!("{} {} ({}ms)", mark, result.message, result.duration_ms)}
                            </div>
                        }
                    })
            }}

            {move || {
                vm_updated_at.updated_at.get().map(|at| view! {
                    <div class="form__footer">
                        {format!("Atualizado em {}", format_datetime(&at))}
                    </div>
                })
            }}
        </div>
    }
}
