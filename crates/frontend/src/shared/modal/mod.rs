use crate::shared::crud::delete_confirm::use_delete_confirm;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// The one modal surface of the app: "delete this <item>?"
///
/// Escape and overlay clicks cancel.
#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let gate = use_delete_confirm();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && gate.is_open_untracked() {
                    gate.cancel();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || gate.is_open()>
            <div class="modal-overlay" on:click=move |_| gate.cancel()>
                <div class="modal modal--confirm" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">"Confirm Delete"</h2>
                        <button class="button button--icon modal__close" on:click=move |_| gate.cancel()>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        <p>
                            {move || format!(
                                "Are you sure you want to delete this {}? This action cannot be undone.",
                                gate.item_type()
                            )}
                        </p>
                    </div>
                    <div class="modal-footer">
                        <button class="button button--secondary" on:click=move |_| gate.cancel()>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=move |_| gate.confirm()>
                            {icon("delete")}
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
