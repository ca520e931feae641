//! Backend API
//!
//! JSON request/response plumbing shared by every resource binder and the
//! dashboard loader.

mod error;
mod http;
mod dashboard;
#[cfg(test)]
pub mod mock;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::ApiError;
pub use http::HttpTransport;
pub use dashboard::*;

/// Shown when a failed reply carries no `error` text.
pub const GENERIC_FAILURE: &str = "Operação não concluída.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Decoded reply. An empty body decodes to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Collection endpoints answer with a bare JSON array.
    pub fn into_list(self) -> Result<Vec<Value>, ApiError> {
        self.check_status()?;
        match self.body {
            Value::Array(rows) => Ok(rows),
            other => Err(ApiError::Decode(format!("esperava uma lista, recebeu {}", kind_of(&other)))),
        }
    }

    /// Mutations answer with `{ok: true, ...}` or `{ok: false, error}`. A
    /// 2xx without a body (204) counts as accepted.
    pub fn into_ack(self) -> Result<Value, ApiError> {
        self.check_status()?;
        if self.body.is_null() {
            return Ok(self.body);
        }
        match self.body.get("ok").and_then(Value::as_bool) {
            Some(true) => Ok(self.body),
            _ => Err(ApiError::Application(
                server_message(&self.body).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            )),
        }
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.check_status()?;
        Ok(serde_json::from_value(self.body)?)
    }

    fn check_status(&self) -> Result<(), ApiError> {
        if self.is_success() {
            return Ok(());
        }
        match server_message(&self.body) {
            Some(message) => Err(ApiError::Application(message)),
            None => Err(ApiError::Status(self.status)),
        }
    }
}

fn server_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nada",
        Value::Bool(_) => "um booleano",
        Value::Number(_) => "um número",
        Value::String(_) => "um texto",
        Value::Array(_) => "uma lista",
        Value::Object(_) => "um objeto",
    }
}

/// Sends one request and decodes the reply body.
///
/// The browser implementation is [`HttpTransport`]; tests swap in an
/// in-memory transport.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_reply() {
        let rows = ApiResponse::new(200, json!([{"id": 1}, {"id": 2}])).into_list().unwrap();
        assert_eq!(rows.len(), 2);

        let err = ApiResponse::new(200, json!({"ok": true})).into_list().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_ack_reply() {
        assert!(ApiResponse::new(201, json!({"ok": true, "id": 3})).into_ack().is_ok());

        let err = ApiResponse::new(200, json!({"ok": false, "error": "campo obrigatório"}))
            .into_ack()
            .unwrap_err();
        assert_eq!(err, ApiError::Application("campo obrigatório".to_string()));

        let err = ApiResponse::new(200, json!({"ok": false})).into_ack().unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);

        let err = ApiResponse::new(200, json!({"id": 3})).into_ack().unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_empty_success_reply_is_accepted() {
        assert_eq!(ApiResponse::new(204, Value::Null).into_ack(), Ok(Value::Null));
        assert_eq!(
            ApiResponse::new(500, Value::Null).into_ack(),
            Err(ApiError::Status(500))
        );
    }

    #[test]
    fn test_error_status_prefers_server_message() {
        let err = ApiResponse::new(400, json!({"ok": false, "error": "E-mail já cadastrado."}))
            .into_ack()
            .unwrap_err();
        assert_eq!(err.to_string(), "E-mail já cadastrado.");

        let err = ApiResponse::new(502, Value::Null).into_list().unwrap_err();
        assert_eq!(err, ApiError::Status(502));
    }
}
