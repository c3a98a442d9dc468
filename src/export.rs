use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::types::AnalysisResult;

/// Trigger a browser download of the analysis result as a JSON report.
pub fn download_report(result: &AnalysisResult) {
    let json = match serde_json::to_string_pretty(result) {
        Ok(j) => j,
        Err(e) => {
            log::error!("Failed to serialize report: {e}");
            return;
        }
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&json));

    let blob = match web_sys::Blob::new_with_str_sequence(&parts) {
        Ok(b) => b,
        Err(e) => {
            log::error!("Failed to create Blob: {:?}", e);
            return;
        }
    };

    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(u) => u,
        Err(e) => {
            log::error!("Failed to create object URL: {:?}", e);
            return;
        }
    };

    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let a: web_sys::HtmlAnchorElement = document
        .create_element("a").unwrap()
        .dyn_into().unwrap();
    a.set_href(&url);
    a.set_download("analysis-report.json");
    a.set_attribute("style", "display:none").ok();
    document.body().unwrap().append_child(&a).ok();
    a.click();
    document.body().unwrap().remove_child(&a).ok();
    web_sys::Url::revoke_object_url(&url).ok();
}
