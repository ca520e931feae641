//! Browser Transport
//!
//! `fetch`-based implementation of [`Transport`].

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ApiError, ApiRequest, ApiResponse, Transport};

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn build(&self, request: &ApiRequest) -> Result<Request, JsValue> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(&body.to_string()));
        }
        let req = Request::new_with_str_and_init(&self.url(&request.path), &init)?;
        req.headers().set("Accept", "application/json")?;
        if request.body.is_some() {
            req.headers().set("Content-Type", "application/json")?;
        }
        Ok(req)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("[HTTP] {} {}", request.method.as_str(), request.path);

        let req = self.build(&request).map_err(ApiError::network)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("window indisponível".to_string()))?;
        let reply = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(ApiError::network)?;
        let response: Response = reply.dyn_into().map_err(ApiError::network)?;

        let text = JsFuture::from(response.text().map_err(ApiError::network)?)
            .await
            .map_err(ApiError::network)?
            .as_string()
            .unwrap_or_default();

        let status = response.status();
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                // HTML error pages still carry a useful status
                Err(_) if !response.ok() => Value::Null,
                Err(err) => return Err(err.into()),
            }
        };

        log::debug!("[HTTP] {} {} -> {}", request.method.as_str(), request.path, status);
        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(HttpTransport::default().url("/plantoes/api"), "/plantoes/api");
        assert_eq!(
            HttpTransport::new("https://escala360.example/").url("/escalas/api/4"),
            "https://escala360.example/escalas/api/4"
        );
    }
}
