use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::gateway::envelope::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("{kind} '{name}' not found in namespace '{namespace}'")]
    NotFound {
        kind: String,
        namespace: String,
        name: String,
    },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn reason(&self) -> &str {
        match self {
            Error::Kube(_) => "KubernetesError",
            Error::NotFound { .. } => "NotFound",
            Error::InvalidBody(_) => "InvalidRequest",
            Error::InvalidConfig(_) => "InvalidConfiguration",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Store errors of every kind reach the caller as the same 500 `fail`
/// envelope; the variant only matters for logs and metrics.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Envelope::fail(self.to_string())).into_response()
    }
}
