pub mod route_context;
pub mod tabs;
pub mod top_header;

use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use top_header::TopHeader;

/// Casca principal da aplicacao.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              Conteudo                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-main">
                    {center()}
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
