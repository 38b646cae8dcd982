use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::ActivityRegistry;
use crate::services::activities_service::{self, ActivityError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ActivityError> {
    match activities_service::signup(&registry, &activity_name, &query.email).await {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Signup for {} failed for {}: {}", activity_name, query.email, e);
            Err(e)
        }
    }
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ActivityError> {
    match activities_service::unregister(&registry, &activity_name, &query.email).await {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Unregister from {} failed for {}: {}", activity_name, query.email, e);
            Err(e)
        }
    }
}
