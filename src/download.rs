//! Browser File Save
//!
//! Turns downloaded bytes into a Blob object URL and clicks a synthetic
//! anchor so the browser saves the file under its stored name.

use wasm_bindgen::JsCast;

pub fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| format!("{:?}", e))?;
    let object_url =
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&object_url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&object_url);
    Ok(())
}
