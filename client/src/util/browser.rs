//! Clock and viewport readings.

/// Milliseconds since the epoch, or `0.0` outside the browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Inner width and height of the window in CSS pixels.
#[must_use]
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| match v {
            Ok(v) => v.as_f64().unwrap_or(0.0),
            Err(e) => {
                log::warn!("viewport size unavailable: {e:?}");
                0.0
            }
        };
        (read(window.inner_width()), read(window.inner_height()))
    }
    #[cfg(not(feature = "csr"))]
    {
        (0.0, 0.0)
    }
}
