use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analysis::{AnalysisProvider, MockAnalysis};
use crate::state::AppState;

#[component]
pub fn PreviewCard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let analyzing = move || state.session.with(|s| s.analyzing);

    let on_dismiss = move |_: web_sys::MouseEvent| {
        state.session.update(|s| s.reset());
    };

    let on_analyze = move |_: web_sys::MouseEvent| {
        let mut started = None;
        state.session.update(|s| started = s.begin_analysis());
        let Some(token) = started else { return };
        let Some(image) = state.session.with_untracked(|s| s.image.clone()) else { return };

        spawn_local(async move {
            match MockAnalysis.analyze(&image).await {
                Ok(result) => {
                    state.session.update(|s| s.complete_analysis(token, result));
                }
                Err(e) => {
                    log::error!("Analysis failed: {e}");
                    state.show_error_toast("Analysis failed");
                    state.session.update(|s| s.fail_analysis(token));
                }
            }
        });
    };

    let file_label = move || {
        state.session.with(|s| {
            s.image
                .as_ref()
                .map(|img| format!("{} \u{2022} {:.1}MB", img.name, img.size_mb()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="preview-card">
            <div class="preview-header">
                <h3>"Preview"</h3>
                <button class="dismiss-btn" on:click=on_dismiss>"\u{2715}"</button>
            </div>
            {move || {
                state.session.with(|s| s.preview.clone()).map(|src| {
                    view! { <img class="preview-image" src=src alt="Preview" /> }
                })
            }}
            <div class="preview-footer">
                <p class="file-info">{file_label}</p>
                <button
                    class="analyze-btn"
                    disabled=analyzing
                    on:click=on_analyze
                >
                    {move || {
                        if analyzing() {
                            view! {
                                <span class="btn-spinner"></span>
                                <span>"Analyzing..."</span>
                            }.into_any()
                        } else {
                            view! { <span>"Analyze"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
