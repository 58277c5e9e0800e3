use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome tag carried in every response body
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
}

/// JSON body shared by all endpoints: `{"msg": .., "status": .., "data": ..}`.
/// `msg` and `data` serialize as `null` when absent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Envelope<T> {
    pub msg: Option<String>,
    pub status: Outcome,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            msg: None,
            status: Outcome::Success,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload
    pub fn empty() -> Self {
        Self {
            msg: None,
            status: Outcome::Success,
            data: None,
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            status: Outcome::Fail,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
