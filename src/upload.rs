use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::session::is_image_mime;
use crate::state::AppState;
use crate::types::ImageFile;

/// Take a candidate file from the picker or a drop. Non-image MIME types are
/// ignored without touching session state.
pub async fn accept_candidate(file: File, state: AppState) -> Result<(), String> {
    let mime = file.type_();
    if !is_image_mime(&mime) {
        log::warn!("Ignoring non-image file {:?} (type {:?})", file.name(), mime);
        return Ok(());
    }

    let image = ImageFile {
        name: file.name(),
        size_bytes: file.size(),
        mime,
    };
    log::info!("Accepted {}: {:.1} MB", image.name, image.size_mb());

    let mut token = 0;
    state.session.update(|s| token = s.accept_file(image));

    match read_data_url(&file).await {
        Ok(data_url) => {
            state.session.update(|s| s.apply_preview(token, data_url));
            Ok(())
        }
        Err(e) => {
            state.show_error_toast("Could not read the selected file");
            state.session.update(|s| s.reset());
            Err(e)
        }
    }
}

/// Decode a file into a data URI via `FileReader.readAsDataURL`.
async fn read_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("FileReader: {e:?}"))?;
    let reader_clone = reader.clone();

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let resolve_clone = resolve.clone();
        let reject_clone = reject.clone();

        let onload = Closure::once(move |_: web_sys::Event| {
            resolve_clone.call0(&JsValue::NULL).unwrap();
        });
        let onerror = Closure::once(move |_: web_sys::Event| {
            reject_clone.call0(&JsValue::NULL).unwrap();
        });

        reader_clone.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader_clone.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        onload.forget();
        onerror.forget();
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("read_as_data_url: {e:?}"))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| format!("FileReader await: {e:?}"))?;

    let result = reader.result().map_err(|e| format!("result: {e:?}"))?;
    result
        .as_string()
        .ok_or_else(|| "Expected a data URL string".to_string())
}
