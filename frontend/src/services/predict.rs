//! Browser side of the `/predict` call.
//!
//! [`BrowserFile`] adapts a DOM `File` to the widget, [`FetchTransport`]
//! posts it as `FormData` with gloo-net.

use gloo_net::http::Request;
use imgpredict::config::UPLOAD_FIELD;
use imgpredict::{FileLike, HttpReply, PredictError, PredictResult, PredictTransport};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, Url};

/// A file picked or dropped by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }
}

impl FileLike for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    /// Object URL for the `<img>` preview. Release with [`revoke_preview`].
    fn preview_url(&self) -> Option<String> {
        Url::create_object_url_with_blob(&self.0)
            .map_err(|e| log::warn!("No preview for {}: {:?}", self.0.name(), e))
            .ok()
    }
}

/// Release an object URL created for a preview.
pub fn revoke_preview(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke {}: {:?}", url, e);
    }
}

/// Milliseconds on the page clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// `fetch`-based transport.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn js_error(value: JsValue) -> PredictError {
    PredictError::Network(format!("{:?}", value))
}

impl PredictTransport<BrowserFile> for FetchTransport {
    async fn send(&self, file: &BrowserFile) -> PredictResult<HttpReply> {
        // FormData with the single `file` part
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file.0, &file.0.name())
            .map_err(js_error)?;

        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
