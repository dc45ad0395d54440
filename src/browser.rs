//! Browser Helpers
//!
//! Client-side download and file-picker plumbing.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlInputElement, Url};

use crate::error::ExportError;

/// Offer `bytes` to the user as a download named `file_name`
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| ExportError::Browser("no document available".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("<a> is not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;

    log::info!("[Download] {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

/// Name of the first file chosen in a file input, if any
pub fn selected_file_name(input: &HtmlInputElement) -> Option<String> {
    input.files().and_then(|files| files.get(0)).map(|file| file.name())
}
