//! API Errors
//!
//! Every failure a backend call can produce. All of them end up as a toast
//! or an inline message; only the text differs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Falha de comunicação com o servidor ({0})")]
    Network(String),

    /// Non-2xx reply without an application message.
    #[error("Erro do servidor (HTTP {0})")]
    Status(u16),

    /// `{ok: false, error}` reply.
    #[error("{0}")]
    Application(String),

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Debug) -> Self {
        ApiError::Network(format!("{:?}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
