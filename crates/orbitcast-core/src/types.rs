//! Domain types for the broadcast catalog

use serde::{Deserialize, Serialize};

/// A satellite row as persisted in the `satellites` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: i32,
    pub name: String,
    /// Expected operational lifetime, in years.
    pub lifetime: i32,
    /// Orbit radius, in kilometers.
    pub orbit_radius: f64,
}

/// A TV channel row as persisted in the `tv_channels` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvChannel {
    pub id: i32,
    pub name: String,
    pub language: String,
    pub specifics: String,
    pub company: String,
}

/// A broadcast row linking a satellite to a TV channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: i32,
    pub coverage_from: f64,
    pub coverage_to: f64,
    pub satellite_id: i32,
    pub tv_channel_id: i32,
}

/// Request payload for creating or replacing a satellite.
///
/// All fields are required; a missing or mistyped field is rejected at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInput {
    pub name: String,
    pub lifetime: i32,
    pub orbit_radius: f64,
}

/// Request payload for creating or replacing a TV channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvChannelInput {
    pub name: String,
    pub language: String,
    pub specifics: String,
    pub company: String,
}

/// Request payload for creating or replacing a broadcast.
///
/// `satellite_id` and `tv_channel_id` must reference existing rows; the
/// database foreign keys are the only enforcement. No ordering check is
/// made between `coverage_from` and `coverage_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastInput {
    pub coverage_from: f64,
    pub coverage_to: f64,
    pub satellite_id: i32,
    pub tv_channel_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellite_serializes_with_named_fields() {
        let sat = Satellite {
            id: 1,
            name: "Iridium-1".to_string(),
            lifetime: 15,
            orbit_radius: 780.5,
        };
        let json = serde_json::to_value(&sat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Iridium-1",
                "lifetime": 15,
                "orbit_radius": 780.5
            })
        );
    }

    #[test]
    fn satellite_input_requires_all_fields() {
        let missing = serde_json::json!({ "name": "Iridium-1", "lifetime": 15 });
        let result: Result<SatelliteInput, _> = serde_json::from_value(missing);
        assert!(result.is_err());
    }

    #[test]
    fn satellite_input_rejects_mistyped_field() {
        let mistyped = serde_json::json!({
            "name": "Iridium-1",
            "lifetime": "fifteen",
            "orbit_radius": 780.5
        });
        let result: Result<SatelliteInput, _> = serde_json::from_value(mistyped);
        assert!(result.is_err());
    }

    #[test]
    fn broadcast_input_round_trips_ids() {
        let input: BroadcastInput = serde_json::from_value(serde_json::json!({
            "coverage_from": -30.0,
            "coverage_to": 45.5,
            "satellite_id": 3,
            "tv_channel_id": 7
        }))
        .unwrap();
        assert_eq!(input.satellite_id, 3);
        assert_eq!(input.tv_channel_id, 7);
    }
}
