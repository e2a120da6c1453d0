//! `/predict` wire types.
//!
//! Success: any 2xx with `{ "ok": true, "result": { ... } }`.
//! Anything else is mapped onto a [`PredictError`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PredictError, PredictResult};
use crate::models::PredictionResult;

/// Raw HTTP answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200..=299, same as `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON body of a 2xx answer.
///
/// Both fields stay loosely typed: `ok` follows script truthiness and
/// `result` is coerced field by field in [`PredictionResult::from_value`].
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub ok: Value,
    #[serde(default)]
    pub result: Option<Value>,
}

/// Turn an HTTP answer into a result or the matching error.
///
/// Numbers outside the `f64` range (`1e400`) make the body invalid JSON.
pub fn interpret_reply(reply: HttpReply) -> PredictResult<PredictionResult> {
    if !reply.is_success() {
        return Err(PredictError::Server {
            status: reply.status,
            body: reply.body,
        });
    }

    let payload: Value =
        serde_json::from_str(&reply.body).map_err(|e| PredictError::InvalidJson(e.to_string()))?;

    // Arrays would deserialize positionally; only an object is an envelope
    if !payload.is_object() {
        return Err(PredictError::UnexpectedResponse);
    }
    let response = PredictResponse::deserialize(payload)
        .map_err(|e| PredictError::InvalidJson(e.to_string()))?;

    if !is_truthy(&response.ok) {
        return Err(PredictError::UnexpectedResponse);
    }

    match response.result {
        None => Err(PredictError::MissingResult),
        Some(result) => PredictionResult::from_value(result),
    }
}

/// Script-style truthiness: `false`, `null`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
