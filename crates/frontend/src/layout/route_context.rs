use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Caminho exibido quando o navegador nao informa nenhum.
pub const DEFAULT_PATH: &str = "/configuration";

/// Estado de navegacao da tela de configuracoes.
///
/// A rota ativa vive num sinal; `navigate` empilha a rota nova no
/// historico do navegador e um listener de `popstate` traz o sinal de
/// volta quando o usuario usa os botoes voltar/avancar. Nenhum crate de
/// roteamento e usado.
#[derive(Clone, Copy)]
pub struct RouteContext {
    pub path: RwSignal<String>,
}

impl RouteContext {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(DEFAULT_PATH.to_string()),
        }
    }

    /// Le o caminho atual do navegador e registra o listener de
    /// `popstate`. Roda uma unica vez, na montagem da casca.
    pub fn init_history_integration(&self) {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if !initial.is_empty() && initial != "/" {
            self.path.set(initial);
        }

        let path = self.path;
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            if let Some(current) = window().and_then(|w| w.location().pathname().ok()) {
                path.set(current);
            }
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        // O listener vive enquanto a pagina viver
        on_popstate.forget();
    }

    /// Navega para a rota informada, empilhando uma entrada no historico
    /// para o botao voltar devolver a aba anterior.
    pub fn navigate(&self, path: &str) {
        if !creates_history_entry(&self.path.get_untracked(), path) {
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(path),
                );
            }
        }
        self.path.set(path.to_string());
    }
}

/// Clicar na aba ja ativa nao deve empilhar uma entrada duplicada.
fn creates_history_entry(current: &str, target: &str) -> bool {
    current != target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigating_to_a_new_tab_creates_a_history_entry() {
        assert!(creates_history_entry("/configuration", "/configuration/evolution"));
        assert!(creates_history_entry(
            "/configuration/evolution",
            "/configuration/email/reset-password"
        ));
    }

    #[test]
    fn test_renavigating_to_the_active_tab_does_not() {
        assert!(!creates_history_entry("/configuration", "/configuration"));
        assert!(!creates_history_entry(
            "/configuration/evolution",
            "/configuration/evolution"
        ));
    }
}
