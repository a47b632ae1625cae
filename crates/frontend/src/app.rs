use crate::layout::route_context::RouteContext;
use crate::layout::Shell;
use crate::pages::configuration::ConfigurationPage;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let route = leptos::context::use_context::<RouteContext>()
        .expect("RouteContext context not found");

    // Sincroniza o caminho da URL com o estado de navegacao. Roda uma
    // unica vez, quando o componente e criado.
    route.init_history_integration();

    view! {
        <Shell center=|| view! { <ConfigurationPage /> }.into_any() />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Disponibiliza a navegacao e o servico de toasts para toda a arvore.
    provide_context(RouteContext::new());
    provide_context(ToastService::new());

    view! {
        <MainLayout />
    }
}
