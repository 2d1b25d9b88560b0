//! File downloads through a temporary object URL.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use notekeeper_core::ports::DownloadPort;
use notekeeper_types::{NotesError, Result};

fn js_err(e: JsValue) -> NotesError {
    NotesError::JsInterop(format!("{:?}", e))
}

#[derive(Debug, Default)]
pub struct BrowserDownloads;

impl BrowserDownloads {
    pub fn new() -> Self {
        Self
    }
}

impl DownloadPort for BrowserDownloads {
    fn offer_download(&self, filename: &str, mime: &str, contents: &str) -> Result<()> {
        let parts = Array::of1(&JsValue::from_str(contents));

        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: HtmlAnchorElement = gloo_utils::document()
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| NotesError::JsInterop("Element is not an anchor".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_err)?;
        log::debug!("Offered {} ({} bytes)", filename, contents.len());
        Ok(())
    }
}
