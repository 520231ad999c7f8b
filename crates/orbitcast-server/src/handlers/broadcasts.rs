//! Broadcast handlers
//!
//! A broadcast links one satellite to one TV channel. The referenced ids
//! are validated by the database foreign keys only; a violation surfaces
//! as a storage error, not a dedicated status.

use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use orbitcast_core::{Broadcast, BroadcastInput};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BroadcastListResponse {
    broadcasts: Vec<Broadcast>,
}

#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    broadcast: Broadcast,
}

#[derive(Debug, Serialize)]
pub struct CreateBroadcastResponse {
    id: i32,
    broadcast: BroadcastInput,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<BroadcastListResponse>, StatusCode> {
    match state.db.list_broadcasts().await {
        Ok(broadcasts) => Ok(Json(BroadcastListResponse { broadcasts })),
        Err(e) => {
            tracing::error!("Failed to list broadcasts: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BroadcastResponse>, StatusCode> {
    match state.db.get_broadcast(id).await {
        Ok(Some(broadcast)) => Ok(Json(BroadcastResponse { broadcast })),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get broadcast {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BroadcastInput>,
) -> Result<Json<CreateBroadcastResponse>, StatusCode> {
    match state.db.create_broadcast(&input).await {
        Ok(id) => Ok(Json(CreateBroadcastResponse {
            id,
            broadcast: input,
        })),
        Err(e) => {
            tracing::error!("Failed to create broadcast: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// The update acknowledges success even when no row matched the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<BroadcastInput>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.update_broadcast(id, &input).await {
        Ok(()) => Ok(Json(MessageResponse::new("Broadcast updated successfully"))),
        Err(e) => {
            tracing::error!("Failed to update broadcast {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.delete_broadcast(id).await {
        Ok(()) => Ok(Json(MessageResponse::new("Broadcast deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete broadcast {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_echoes_submitted_fields() {
        let input = BroadcastInput {
            coverage_from: -30.0,
            coverage_to: 45.5,
            satellite_id: 1,
            tv_channel_id: 2,
        };
        let json = serde_json::to_value(CreateBroadcastResponse {
            id: 9,
            broadcast: input,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "broadcast": {
                    "coverage_from": -30.0,
                    "coverage_to": 45.5,
                    "satellite_id": 1,
                    "tv_channel_id": 2
                }
            })
        );
    }

    #[test]
    fn list_response_wraps_rows_in_broadcasts_key() {
        let json = serde_json::to_value(BroadcastListResponse { broadcasts: vec![] }).unwrap();
        assert_eq!(json, serde_json::json!({ "broadcasts": [] }));
    }
}
