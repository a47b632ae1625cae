use leptos::prelude::*;

/// Barra superior da aplicacao.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"ZapCRM"</span>
            </div>
        </div>
    }
}
