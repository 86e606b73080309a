//! Imperative control of `<video>` elements.
//!
//! Cell state in the wall is the source of truth; these helpers push it into
//! the element. Media errors are logged and otherwise ignored.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Seconds of drift tolerated before a stored position is pushed back into the element.
pub const SEEK_TOLERANCE_S: f64 = 0.5;

/// Whether the element at `current` should be moved to `target`.
#[must_use]
pub fn needs_seek(current: f64, target: f64) -> bool {
    target.is_finite() && (current - target).abs() > SEEK_TOLERANCE_S
}

#[cfg(feature = "csr")]
pub fn play(video: &web_sys::HtmlVideoElement) {
    match video.play() {
        Ok(promise) => {
            leptos::task::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("play() rejected: {e:?}");
                }
            });
        }
        Err(e) => log::warn!("play() failed: {e:?}"),
    }
}

#[cfg(feature = "csr")]
pub fn pause(video: &web_sys::HtmlVideoElement) {
    if let Err(e) = video.pause() {
        log::warn!("pause() failed: {e:?}");
    }
}

/// Apply a desired playing flag, touching the element only when it differs.
#[cfg(feature = "csr")]
pub fn set_playing(video: &web_sys::HtmlVideoElement, playing: bool) {
    if playing && video.paused() {
        play(video);
    } else if !playing && !video.paused() {
        pause(video);
    }
}

#[cfg(feature = "csr")]
pub fn seek(video: &web_sys::HtmlVideoElement, seconds: f64) {
    if needs_seek(video.current_time(), seconds) {
        video.set_current_time(seconds);
    }
}

#[cfg(feature = "csr")]
pub fn set_muted(video: &web_sys::HtmlVideoElement, muted: bool) {
    if video.muted() != muted {
        video.set_muted(muted);
    }
}
