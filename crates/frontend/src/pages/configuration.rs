use crate::domain::a001_whatsapp_integration::ui::details::WhatsappIntegrationDetails;
use crate::domain::a002_general_settings::ui::details::GeneralSettingsDetails;
use crate::domain::a003_reset_password_email::ui::details::ResetPasswordEmailDetails;
use crate::layout::route_context::RouteContext;
use crate::layout::tabs::{active_tab, TabStrip};
use leptos::prelude::*;

/// Tela de configuracoes: titulo, abas e o formulario da aba ativa.
#[component]
pub fn ConfigurationPage() -> impl IntoView {
    let route = leptos::context::use_context::<RouteContext>()
        .expect("RouteContext context not found");

    view! {
        <div class="page configuration-page">
            <h2 class="page__title">"Configurações"</h2>

            <TabStrip />

            <div class="page__content">
                {move || {
                    match active_tab(&route.path.get()).map(|tab| tab.route) {
                        Some("/configuration") => {
                            view! { <GeneralSettingsDetails /> }.into_any()
                        }
                        Some("/configuration/evolution") => {
                            view! { <WhatsappIntegrationDetails /> }.into_any()
                        }
                        Some("/configuration/email/reset-password") => {
                            view! { <ResetPasswordEmailDetails /> }.into_any()
                        }
                        _ => view! {
                            <div class="empty-state">"Página não encontrada."</div>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
