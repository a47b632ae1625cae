use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Quanto tempo um toast permanece na tela, em milissegundos.
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Servico centralizado de toasts.
///
/// Guarda no maximo uma mensagem por vez; mostrar outra substitui a atual.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<(ToastKind, String)>>,
    sequence: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            sequence: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let seq = self.sequence.get_untracked() + 1;
        self.sequence.set(seq);
        self.current.set(Some((kind, message)));

        let current = self.current;
        let sequence = self.sequence;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            // Um toast mais novo pode ja ter substituido este
            if sequence.get_untracked() == seq {
                current.set(None);
            }
        });
    }
}

/// Renderiza o toast atual, se houver.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        {move || {
            toasts.current.get().map(|(kind, message)| {
                let class = match kind {
                    ToastKind::Success => "toast toast--success",
                    ToastKind::Error => "toast toast--error",
                };
                view! { <div class=class>{message}</div> }
            })
        }}
    }
}
