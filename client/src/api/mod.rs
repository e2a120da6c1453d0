//! Client side of the `/predict` endpoint.
//!
//! The request itself goes through a [`PredictTransport`]: `fetch` +
//! `FormData` in the browser, reqwest multipart natively
//! ([`HttpTransport`], `native` feature). Interpreting the answer is
//! shared and lives in [`types`].

pub mod types;

#[cfg(feature = "native")]
pub mod http;

pub use types::{interpret_reply, is_truthy, HttpReply, PredictResponse};

#[cfg(feature = "native")]
pub use http::HttpTransport;

use crate::error::PredictResult;
use crate::models::{FileLike, PredictionResult};

/// Sends one file to `/predict` as a multipart `file` field.
///
/// Implementations return the status and body text of any response they
/// get; only failures before a response are errors
/// ([`crate::PredictError::Network`]).
#[allow(async_fn_in_trait)]
pub trait PredictTransport<F: FileLike> {
    async fn send(&self, file: &F) -> PredictResult<HttpReply>;
}

/// Upload `file` and interpret the answer.
pub async fn predict<F, T>(transport: &T, file: &F) -> PredictResult<PredictionResult>
where
    F: FileLike,
    T: PredictTransport<F>,
{
    let reply = transport.send(file).await?;
    log::debug!("/predict answered {} ({} bytes)", reply.status, reply.body.len());
    interpret_reply(reply)
}
