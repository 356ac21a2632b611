//! Boundary contract between the cluster editor core and the Crane backend.
//!
//! The editor core never talks to the network itself: it builds the wire
//! payloads defined here and hands them to whatever [`ClusterGateway`]
//! implementation the embedding application supplies (HTTP client, test
//! stub, ...). Payload field names follow the backend's JSON conventions
//! (`craneUrl`), so these types serialize directly into request bodies.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// One cluster entry inside a batch create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub name: String,
    pub crane_url: String,
}

/// Batch create request. Entry order follows tab order in the editor and is
/// preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClustersRequest {
    pub clusters: Vec<ClusterSpec>,
}

/// Single-record update request for an existing cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClusterRequest {
    pub id: String,
    pub name: String,
    pub crane_url: String,
}

/// Error returned by a gateway call.
///
/// The message is shown verbatim as the error banner in the editor, so
/// implementations should produce text fit for end users rather than raw
/// transport diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Asynchronous backend operations consumed by the editor core.
///
/// Implementations own transport, authentication and timeout policy. The
/// editor issues at most one call per submit action and never retries; a
/// returned `Err` leaves the editing session open for the user to fix and
/// resubmit.
pub trait ClusterGateway: Send + Sync + 'static {
    /// Create every cluster in the batch. All-or-nothing from the caller's
    /// point of view.
    fn create_clusters(
        &self,
        request: CreateClustersRequest,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Update a single existing cluster record.
    fn update_cluster(
        &self,
        request: UpdateClusterRequest,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn create_request_serializes_with_camel_case_crane_url() {
        let req = CreateClustersRequest {
            clusters: vec![
                ClusterSpec {
                    name: "prod".into(),
                    crane_url: "http://crane.prod.example.com".into(),
                },
                ClusterSpec {
                    name: "staging".into(),
                    crane_url: "https://crane.staging.example.com".into(),
                },
            ],
        };
        let v = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            v,
            serde_json::json!({
                "clusters": [
                    { "name": "prod", "craneUrl": "http://crane.prod.example.com" },
                    { "name": "staging", "craneUrl": "https://crane.staging.example.com" },
                ]
            })
        );
    }

    #[test]
    fn update_request_carries_backend_id() {
        let req = UpdateClusterRequest {
            id: "cls-7".into(),
            name: "prod".into(),
            crane_url: "https://crane.example.com".into(),
        };
        let v = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            v,
            serde_json::json!({
                "id": "cls-7",
                "name": "prod",
                "craneUrl": "https://crane.example.com",
            })
        );
    }

    #[test]
    fn gateway_error_displays_message_verbatim() {
        let err = GatewayError::new("cluster name already exists");
        assert_eq!(err.to_string(), "cluster name already exists");
    }
}
