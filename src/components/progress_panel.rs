use leptos::prelude::*;

use crate::analysis::ANALYSIS_STEPS;

#[component]
pub fn ProgressPanel() -> impl IntoView {
    let steps: Vec<_> = ANALYSIS_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            // Steps fade in one after another while the timer runs
            let delay = format!("animation-delay: {:.1}s", i as f64 * 0.5);
            view! {
                <div class="analysis-step" style=delay>
                    <div class="step-dot"></div>
                    <span>{*step}</span>
                </div>
            }
        })
        .collect();

    view! {
        <div class="progress-panel">
            <h3>"AI Analysis in Progress"</h3>
            <div class="analysis-steps">{steps}</div>
            <div class="progress-track">
                <div class="progress-fill"></div>
            </div>
        </div>
    }
}
