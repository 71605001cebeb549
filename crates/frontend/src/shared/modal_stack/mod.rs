//! Application-wide modal stack.
//!
//! Detail forms, confirmations and result messages are all pushed here and
//! rendered by a single [`ModalHost`] at the root. Escape and overlay clicks
//! close only the topmost modal.

mod frame;

pub use frame::ModalFrame;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Surface of details forms opened from lists.
pub const FORM_MODAL_STYLE: &str = "max-width: min(960px, 95vw); width: min(960px, 95vw);";

const BASE_Z_INDEX: i32 = 1000;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    surface_class: String,
    surface_style: String,
}

/// Lets a modal close itself; cheap to clone into event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.stack.with_untracked(|s| s.len())
    }

    /// Push a modal with the default surface.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(None, None, builder)
    }

    /// Push a modal with extra style/class on its surface (e.g. a wider details form).
    pub fn push_with_frame<F>(
        &self,
        surface_style: Option<String>,
        surface_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                surface_class: surface_class.unwrap_or_default(),
                surface_style: surface_style.unwrap_or_default(),
            })
        });
        log::debug!("modal {} opened (depth {})", id, self.len());
        ModalHandle { id, svc: *self }
    }

    /// Details form in a wide modal; the builder receives a callback that closes it.
    pub fn open_form<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(Callback<()>) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(
            Some(FORM_MODAL_STYLE.to_string()),
            Some("details-modal".to_string()),
            move |handle| builder(Callback::new(move |_| handle.close())),
        )
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Closes on the next tick so the originating DOM event finishes first.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn pop_deferred(&self) {
        let Some(top) = self.stack.with_untracked(|s| s.last().map(|e| e.id)) else {
            return;
        };
        self.close_deferred(top);
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Stack entries paired with their z-index; later entries sit on top.
fn layers(stack: Vec<ModalEntry>) -> Vec<(i32, ModalEntry)> {
    stack
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| (BASE_Z_INDEX + idx as i32, entry))
        .collect()
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

/// Renders the stack; mounted exactly once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // the host lives as long as the app
            closure.forget();
        }
    });

    let entries = move || layers(svc.stack.get());
    let entry_key = |(_, entry): &(i32, ModalEntry)| entry.id;
    let render_entry = move |(z_index, entry): (i32, ModalEntry)| {
        let handle = ModalHandle { id: entry.id, svc };
        let on_close = Callback::new(move |_| handle.close());
        view! {
            <ModalFrame
                z_index=z_index
                on_close=on_close
                modal_style=entry.surface_style.clone()
                modal_class=entry.surface_class.clone()
            >
                {(entry.builder)(handle)}
            </ModalFrame>
        }
    };

    view! {
        <For each=entries key=entry_key children=render_entry />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> ModalEntry {
        ModalEntry {
            id,
            builder: Arc::new(|_: ModalHandle| ().into_any()),
            surface_class: String::new(),
            surface_style: String::new(),
        }
    }

    #[test]
    fn test_topmost_modal_layers_above() {
        let stacked = layers(vec![entry(4), entry(7)]);
        let order: Vec<(i32, u64)> = stacked.iter().map(|(z, e)| (*z, e.id)).collect();
        assert_eq!(order, vec![(1000, 4), (1001, 7)]);
        assert!(layers(Vec::new()).is_empty());
    }
}
