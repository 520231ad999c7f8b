//! TV channel handlers

use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use orbitcast_core::{TvChannel, TvChannelInput};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TvChannelListResponse {
    tv_channels: Vec<TvChannel>,
}

#[derive(Debug, Serialize)]
pub struct TvChannelResponse {
    tv_channel: TvChannel,
}

#[derive(Debug, Serialize)]
pub struct CreateTvChannelResponse {
    id: i32,
    tv_channel: TvChannelInput,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<TvChannelListResponse>, StatusCode> {
    match state.db.list_tv_channels().await {
        Ok(tv_channels) => Ok(Json(TvChannelListResponse { tv_channels })),
        Err(e) => {
            tracing::error!("Failed to list TV channels: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TvChannelResponse>, StatusCode> {
    match state.db.get_tv_channel(id).await {
        Ok(Some(tv_channel)) => Ok(Json(TvChannelResponse { tv_channel })),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get TV channel {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TvChannelInput>,
) -> Result<Json<CreateTvChannelResponse>, StatusCode> {
    match state.db.create_tv_channel(&input).await {
        Ok(id) => Ok(Json(CreateTvChannelResponse {
            id,
            tv_channel: input,
        })),
        Err(e) => {
            tracing::error!("Failed to create TV channel: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// The update acknowledges success even when no row matched the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<TvChannelInput>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.update_tv_channel(id, &input).await {
        Ok(()) => Ok(Json(MessageResponse::new("TV Channel updated successfully"))),
        Err(e) => {
            tracing::error!("Failed to update TV channel {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.delete_tv_channel(id).await {
        Ok(()) => Ok(Json(MessageResponse::new("TV Channel deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete TV channel {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_echoes_submitted_fields() {
        let input = TvChannelInput {
            name: "Arte".to_string(),
            language: "French".to_string(),
            specifics: "Culture".to_string(),
            company: "Arte GEIE".to_string(),
        };
        let json = serde_json::to_value(CreateTvChannelResponse {
            id: 5,
            tv_channel: input,
        })
        .unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["tv_channel"]["language"], "French");
        assert_eq!(json["tv_channel"]["company"], "Arte GEIE");
    }

    #[test]
    fn list_response_wraps_rows_in_tv_channels_key() {
        let json = serde_json::to_value(TvChannelListResponse { tv_channels: vec![] }).unwrap();
        assert_eq!(json, serde_json::json!({ "tv_channels": [] }));
    }
}
