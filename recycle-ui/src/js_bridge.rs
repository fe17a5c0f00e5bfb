//! Typed wrappers around browser APIs reached via `js_sys::eval()`.
//!
//! Geolocation and `FileReader` are callback based. Each wrapper evaluates a
//! small script that returns a `Promise` and awaits it with
//! `wasm_bindgen_futures::JsFuture`. Values cross the boundary as plain
//! strings (JSON where structured).

use recycle_core::error::GeolocationError;
use recycle_core::location::Coordinates;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Recycle JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Evaluate an expression that yields a `Promise` and await it.
async fn await_promise(code: &str) -> Result<JsValue, String> {
    let value = js_sys::eval(code).map_err(js_error)?;
    let promise: js_sys::Promise = value
        .dyn_into()
        .map_err(|_| "expression did not yield a Promise".to_string())?;
    JsFuture::from(promise).await.map_err(js_error)
}

/// Ask the platform location API for the current position.
///
/// No timeout or accuracy options are passed; a denied prompt or a
/// missing API becomes a [`GeolocationError`].
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let code = r#"
        (new Promise(function(resolve, reject) {
            if (!navigator.geolocation) {
                reject('Geolocation is not supported by this browser');
                return;
            }
            navigator.geolocation.getCurrentPosition(
                function(pos) {
                    resolve(JSON.stringify({
                        latitude: pos.coords.latitude,
                        longitude: pos.coords.longitude
                    }));
                },
                function(err) { reject(err && err.message ? err.message : String(err)); }
            );
        }))
    "#;
    let value = await_promise(code).await.map_err(GeolocationError)?;
    let json = value
        .as_string()
        .ok_or_else(|| GeolocationError("position was not a string".to_string()))?;
    serde_json::from_str(&json).map_err(|e| GeolocationError(e.to_string()))
}

/// Read the first file of an `<input type="file">` as a data URL.
///
/// Returns `Ok(None)` when no file is selected.
pub async fn read_file_as_data_url(input_id: &str) -> Result<Option<String>, String> {
    let code = format!(
        r#"
        (new Promise(function(resolve, reject) {{
            var input = document.getElementById('{input_id}');
            if (!input || !input.files || input.files.length === 0) {{
                resolve(null);
                return;
            }}
            var reader = new FileReader();
            reader.onload = function(e) {{ resolve(e.target.result); }};
            reader.onerror = function() {{ reject('failed to read file'); }};
            reader.readAsDataURL(input.files[0]);
        }}))
        "#,
    );
    let value = await_promise(&code).await?;
    Ok(value.as_string())
}

/// Reset a file input so the same file can be picked again.
pub fn clear_file_input(input_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.value = '';",
        input_id
    ));
}

/// Scroll a container to its last child.
///
/// Deferred with `setTimeout` so it runs after Dioxus has patched the DOM.
pub fn scroll_to_bottom(container_id: &str) {
    call_js(&format!(
        "setTimeout(function() {{ var el = document.getElementById('{}'); if (el) el.scrollTop = el.scrollHeight; }}, 0);",
        container_id
    ));
}

/// Origin of the current page, e.g. `https://recycle.example`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
