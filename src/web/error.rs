use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::activities_service::{ActivityError, ErrorKind};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
