use wasm_bindgen_futures::JsFuture;

use crate::types::{AnalysisResult, ImageFile};

/// Fixed duration of the simulated analysis pipeline.
pub const ANALYSIS_DELAY_MS: i32 = 3000;

/// Step labels shown while an analysis is running.
pub const ANALYSIS_STEPS: [&str; 4] = [
    "Initializing multimodal analysis...",
    "Processing visual elements...",
    "Extracting contextual insights...",
    "Generating comprehensive report...",
];

/// A source of image analysis. `MockAnalysis` is the only implementation
/// today; a real backend slots in here without touching the session machine.
// Called on concrete types only, never through `dyn`, so the auto-trait
// bound caveat behind `async_fn_in_trait` does not apply.
#[allow(async_fn_in_trait)]
pub trait AnalysisProvider {
    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult, String>;
}

/// Placeholder provider: waits a fixed delay, then returns a canned result
/// that does not depend on the image content.
pub struct MockAnalysis;

impl AnalysisProvider for MockAnalysis {
    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult, String> {
        log::info!("Starting mock analysis of {}", image.name);
        sleep_ms(ANALYSIS_DELAY_MS).await?;
        Ok(document_analysis_result())
    }
}

/// The canned result every mock run produces.
pub fn document_analysis_result() -> AnalysisResult {
    AnalysisResult {
        category: "Document Analysis".into(),
        confidence: 94.7,
        insights: vec![
            "This appears to be a technical document with structured content".into(),
            "High text density suggests informational or instructional material".into(),
            "Professional formatting indicates business or educational context".into(),
            "Multiple sections detected with hierarchical organization".into(),
        ],
        tags: vec![
            "Document".into(),
            "Technical".into(),
            "Professional".into(),
            "Text-heavy".into(),
            "Structured".into(),
        ],
        description: "A well-formatted technical document containing structured information \
                      with clear visual hierarchy and professional presentation."
            .into(),
    }
}

/// Resolve after `ms` milliseconds on the browser event loop.
pub(crate) async fn sleep_ms(ms: i32) -> Result<(), String> {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| format!("timer: {e:?}"))?;
    Ok(())
}
