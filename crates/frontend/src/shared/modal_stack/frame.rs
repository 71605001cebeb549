use leptos::ev;
use leptos::prelude::*;

/// Overlay plus positioned surface. Content renders its own header and buttons.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional)]
    z_index: Option<i32>,
    #[prop(optional, into)]
    modal_class: String,
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // Close only when both press and release happen on the overlay, so a text
    // selection dragged out of the surface keeps the modal open.
    let handle_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(on_overlay(&ev));
    let handle_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            on_close.run(());
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", modal_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class=surface_class
                style=format!("position: relative; {}", modal_style)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
