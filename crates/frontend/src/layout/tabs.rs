use crate::layout::route_context::RouteContext;
use leptos::prelude::*;

/// Uma aba fixa da tela de configuracoes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTab {
    pub label: &'static str,
    pub route: &'static str,
}

/// As tres abas, na ordem em que aparecem na tela.
pub static CONFIG_TABS: [ConfigTab; 3] = [
    ConfigTab {
        label: "Principal",
        route: "/configuration",
    },
    ConfigTab {
        label: "Evolution",
        route: "/configuration/evolution",
    },
    ConfigTab {
        label: "E-mail de resetar senha",
        route: "/configuration/email/reset-password",
    },
];

/// Retorna a aba cuja rota casa exatamente com o caminho informado.
///
/// Barras finais sao ignoradas; um caminho desconhecido nao ativa aba
/// nenhuma.
pub fn active_tab(path: &str) -> Option<&'static ConfigTab> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    CONFIG_TABS.iter().find(|tab| tab.route == path)
}

#[component]
pub fn TabStrip() -> impl IntoView {
    let route = leptos::context::use_context::<RouteContext>()
        .expect("RouteContext context not found");

    view! {
        <div class="tabs">
            {CONFIG_TABS
                .iter()
                .map(|tab| {
                    let is_active = Memo::new(move |_| {
                        active_tab(&route.path.get()).map(|active| active.route)
                            == Some(tab.route)
                    });
                    view! {
                        <div
                            class="tab"
                            class:active=is_active
                            on:click=move |_| route.navigate(tab.route)
                        >
                            <span class="tab__label">{tab.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_route_activates_exactly_its_own_tab() {
        for tab in CONFIG_TABS.iter() {
            let active = active_tab(tab.route);
            assert_eq!(active.map(|t| t.label), Some(tab.label));
        }
    }

    #[test]
    fn test_nested_route_does_not_activate_parent() {
        assert_eq!(
            active_tab("/configuration/evolution").map(|t| t.label),
            Some("Evolution")
        );
        assert_eq!(
            active_tab("/configuration/email/reset-password").map(|t| t.label),
            Some("E-mail de resetar senha")
        );
    }

    #[test]
    fn test_unknown_route_activates_nothing() {
        assert!(active_tab("/configuration/unknown").is_none());
        assert!(active_tab("/outra-tela").is_none());
        assert!(active_tab("/").is_none());
        assert!(active_tab("").is_none());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(active_tab("/configuration/").map(|t| t.label), Some("Principal"));
        assert_eq!(
            active_tab("/configuration/evolution/").map(|t| t.label),
            Some("Evolution")
        );
    }
}
