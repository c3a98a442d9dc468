use leptos::prelude::*;

#[component]
pub fn IdlePanel() -> impl IntoView {
    view! {
        <div class="idle-panel">
            <div class="idle-icon"></div>
            <h3>"Ready to Analyze"</h3>
            <p>"Upload an image to begin your visual intelligence journey"</p>
        </div>
    }
}
