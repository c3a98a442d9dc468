use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

use crate::state::AppState;
use crate::upload::accept_candidate;

#[component]
pub fn UploadZone() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        state.session.update(|s| s.drag_hover = true);
    };

    let on_dragleave = move |_: DragEvent| {
        state.session.update(|s| s.drag_hover = false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.session.update(|s| s.drag_hover = false);

        let Some(dt) = ev.data_transfer() else { return };
        let Some(file_list) = dt.files() else { return };
        // Only the first file of a multi-file drop is used
        let Some(file) = file_list.get(0) else { return };
        spawn_local(async move {
            if let Err(e) = accept_candidate(file, state).await {
                log::error!("Failed to load image: {e}");
            }
        });
    };

    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_browse_click = move |_: web_sys::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            let el: &HtmlInputElement = input.as_ref();
            el.click();
        }
    };

    let on_file_input_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file_list) = input.files() else { return };
        let file = file_list.get(0);

        // Reset the input so the same file can be re-selected
        input.set_value("");

        let Some(file) = file else { return };
        spawn_local(async move {
            if let Err(e) = accept_candidate(file, state).await {
                log::error!("Failed to load image: {e}");
            }
        });
    };

    view! {
        <div
            class=move || {
                if state.session.with(|s| s.drag_hover) {
                    "drop-zone drag-over"
                } else {
                    "drop-zone"
                }
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input
                node_ref=file_input_ref
                type="file"
                accept="image/*"
                style="display:none"
                on:change=on_file_input_change
            />
            <div class="drop-hint">
                <div class="drop-icon"></div>
                <p class="drop-title">"Drop your image here or click to browse"</p>
                <p class="drop-formats">"Support for JPG, PNG, GIF, WebP up to 10MB"</p>
                <button class="upload-btn" on:click=on_browse_click>"Select Image"</button>
            </div>
        </div>
    }
}
