use leptos::prelude::*;

use crate::session::Phase;
use crate::state::AppState;
use crate::components::idle_panel::IdlePanel;
use crate::components::preview_card::PreviewCard;
use crate::components::progress_panel::ProgressPanel;
use crate::components::result_panel::ResultPanel;
use crate::components::toast::ErrorToast;
use crate::components::upload_zone::UploadZone;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <div class="app">
            <Header />
            <main class="content">
                <UploadColumn />
                <ResultColumn />
            </main>
            <ErrorToast />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <div class="brand-icon"></div>
                <div>
                    <h1>"Visionary"</h1>
                    <p class="tagline">"Intelligent Visual Assistant"</p>
                </div>
            </div>
            <span class="badge">"Powered by Gemini API"</span>
        </header>
    }
}

#[component]
fn UploadColumn() -> impl IntoView {
    let state = expect_context::<AppState>();
    let has_preview = move || state.session.with(|s| s.preview.is_some());

    view! {
        <section class="upload-column">
            <div class="intro">
                <h2>"Unlock Visual Intelligence"</h2>
                <p>
                    "Upload any image and discover deep, contextual insights \
                     powered by advanced multimodal AI."
                </p>
            </div>
            <UploadZone />
            {move || has_preview().then(|| view! { <PreviewCard /> })}
        </section>
    }
}

#[component]
fn ResultColumn() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section class="result-column">
            {move || match state.session.with(|s| s.phase()) {
                Phase::Analyzing => view! { <ProgressPanel /> }.into_any(),
                Phase::Complete => view! { <ResultPanel /> }.into_any(),
                Phase::Idle => view! { <IdlePanel /> }.into_any(),
                Phase::Ready => view! { <span></span> }.into_any(),
            }}
        </section>
    }
}
