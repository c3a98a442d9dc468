use leptos::prelude::*;

use crate::export::download_report;
use crate::state::AppState;

#[component]
pub fn ResultPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_download = move |_: web_sys::MouseEvent| {
        state.session.with_untracked(|s| {
            if let Some(result) = &s.result {
                download_report(result);
            }
        });
    };

    view! {
        <div class="result-panel">
            {move || {
                let Some(result) = state.session.with(|s| s.result.clone()) else {
                    return view! { <span></span> }.into_any();
                };

                let tags: Vec<_> = result
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag-chip">{tag.clone()}</span> })
                    .collect();

                let insights: Vec<_> = result
                    .insights
                    .iter()
                    .map(|insight| {
                        view! {
                            <div class="insight-row">
                                <div class="insight-dot"></div>
                                <span>{insight.clone()}</span>
                            </div>
                        }
                    })
                    .collect();

                let bar_width = format!("width: {}%", result.confidence);

                view! {
                    <div class="result-header">
                        <h3>"Analysis Complete"</h3>
                        <button class="download-btn" on:click=on_download title="Download report">
                            "\u{2B73}"
                        </button>
                    </div>

                    <div class="result-summary">
                        <div class="summary-row">
                            <span class="summary-label">"Category"</span>
                            <span class="summary-value">{result.category.clone()}</span>
                        </div>
                        <div class="summary-row">
                            <span class="summary-label">"Confidence"</span>
                            <div class="confidence">
                                <div class="confidence-track">
                                    <div class="confidence-fill" style=bar_width></div>
                                </div>
                                <span class="confidence-value">
                                    {format!("{}%", result.confidence)}
                                </span>
                            </div>
                        </div>
                    </div>

                    <div class="result-section">
                        <h4>"Description"</h4>
                        <p>{result.description.clone()}</p>
                    </div>

                    <div class="result-section">
                        <h4>"Tags"</h4>
                        <div class="tag-list">{tags}</div>
                    </div>

                    <div class="result-section">
                        <h4>"Key Insights"</h4>
                        <div class="insight-list">{insights}</div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
