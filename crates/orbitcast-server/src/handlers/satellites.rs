//! Satellite handlers

use crate::handlers::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use orbitcast_core::{Satellite, SatelliteInput};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SatelliteListResponse {
    satellites: Vec<Satellite>,
}

#[derive(Debug, Serialize)]
pub struct SatelliteResponse {
    satellite: Satellite,
}

#[derive(Debug, Serialize)]
pub struct CreateSatelliteResponse {
    id: i32,
    satellite: SatelliteInput,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<SatelliteListResponse>, StatusCode> {
    match state.db.list_satellites().await {
        Ok(satellites) => Ok(Json(SatelliteListResponse { satellites })),
        Err(e) => {
            tracing::error!("Failed to list satellites: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SatelliteResponse>, StatusCode> {
    match state.db.get_satellite(id).await {
        Ok(Some(satellite)) => Ok(Json(SatelliteResponse { satellite })),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get satellite {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SatelliteInput>,
) -> Result<Json<CreateSatelliteResponse>, StatusCode> {
    match state.db.create_satellite(&input).await {
        Ok(id) => Ok(Json(CreateSatelliteResponse {
            id,
            satellite: input,
        })),
        Err(e) => {
            tracing::error!("Failed to create satellite: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// The update acknowledges success even when no row matched the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<SatelliteInput>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.update_satellite(id, &input).await {
        Ok(()) => Ok(Json(MessageResponse::new("Satellite updated successfully"))),
        Err(e) => {
            tracing::error!("Failed to update satellite {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, StatusCode> {
    match state.db.delete_satellite(id).await {
        Ok(()) => Ok(Json(MessageResponse::new("Satellite deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete satellite {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_echoes_submitted_fields() {
        let input = SatelliteInput {
            name: "Iridium-1".to_string(),
            lifetime: 15,
            orbit_radius: 780.5,
        };
        let json = serde_json::to_value(CreateSatelliteResponse {
            id: 1,
            satellite: input,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "satellite": {
                    "name": "Iridium-1",
                    "lifetime": 15,
                    "orbit_radius": 780.5
                }
            })
        );
    }

    #[test]
    fn list_response_wraps_rows_in_satellites_key() {
        let json = serde_json::to_value(SatelliteListResponse { satellites: vec![] }).unwrap();
        assert_eq!(json, serde_json::json!({ "satellites": [] }));
    }

    #[test]
    fn get_response_wraps_row_in_satellite_key() {
        let satellite = Satellite {
            id: 2,
            name: "Hot Bird 13B".to_string(),
            lifetime: 12,
            orbit_radius: 42164.0,
        };
        let json = serde_json::to_value(SatelliteResponse { satellite }).unwrap();
        assert_eq!(json["satellite"]["id"], 2);
        assert_eq!(json["satellite"]["name"], "Hot Bird 13B");
    }
}
