//! Native transport over reqwest.

use reqwest::multipart::{Form, Part};

use super::{HttpReply, PredictTransport};
use crate::config::UPLOAD_FIELD;
use crate::error::{PredictError, PredictResult};
use crate::models::LocalFile;

/// POSTs a [`LocalFile`] to an absolute `/predict` URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PredictTransport<LocalFile> for HttpTransport {
    async fn send(&self, file: &LocalFile) -> PredictResult<HttpReply> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| PredictError::Network(format!("Invalid content type: {}", e)))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
