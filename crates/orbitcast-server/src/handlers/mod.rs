//! HTTP handlers

pub mod broadcasts;
pub mod health;
pub mod satellites;
pub mod tv_channels;

pub use health::health;

use serde::Serialize;

/// Acknowledgment body for update and delete operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_uses_message_key() {
        let json = serde_json::to_value(MessageResponse::new("Satellite updated successfully"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Satellite updated successfully" })
        );
    }
}
