use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn ErrorToast() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || {
            state.toast.get().map(|msg| {
                view! { <div class="error-toast">{msg}</div> }
            })
        }}
    }
}
