//! Errors raised while building request descriptions.

use thiserror::Error;

/// Errors that can occur when encoding a request payload or decoding its response.
///
/// Carrier operations never fail; only [`crate::Request`] construction and
/// response decoding can.
#[derive(Debug, Error)]
pub enum EffectError {
    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode payload for request '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The runtime's response did not match the expected shape.
    #[error("Failed to decode response for request '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EffectError {
    /// Name of the request this error belongs to
    pub fn request_name(&self) -> &str {
        match self {
            EffectError::Encode { name, .. } | EffectError::Decode { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = EffectError::Decode {
            name: "fetch_count".to_string(),
            source,
        };
        assert_eq!(err.request_name(), "fetch_count");
        assert!(err
            .to_string()
            .starts_with("Failed to decode response for request 'fetch_count'"));
    }
}
