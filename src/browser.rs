//! DOM side effects that can't run outside a browser.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, Url};

use crate::error::{ClientError, Result};
use crate::flow::FileSaver;
use crate::toast::ToastPhase;

fn js_err(e: JsValue) -> ClientError {
    ClientError::Browser(format!("{:?}", e))
}

/// Saves files through a hidden `<a download>` link over an object URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| ClientError::Browser("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ClientError::Browser("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| ClientError::Browser("no body".into()))?;

        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ClientError::Browser("anchor cast failed".into()))?;
        anchor.set_attribute("style", "display: none").map_err(js_err)?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(js_err)?;
        anchor.click();
        let _ = Url::revoke_object_url(&url);
        body.remove_child(&anchor).map_err(js_err)?;
        Ok(())
    }
}

pub fn scroll_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Fires `on_elapsed` once the phase's delay passes. Dropping the returned
/// handle cancels it.
pub fn schedule_toast(phase: ToastPhase, on_elapsed: impl FnOnce() + 'static) -> Timeout {
    Timeout::new(phase.delay().as_millis() as u32, on_elapsed)
}
