//! Entities making up the JSON contract between the deployboard server and
//! its GUI. Field names are the wire format, do not rename them.

// std imports
use std::collections::BTreeMap;

// 3rd party imports
use serde::{Deserialize, Serialize};

/// A single host/path combination under which an application is reachable.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIngress {
    /// Hostname from the ingress rule
    pub host: String,
    /// HTTP path within the host
    pub path: String,
    /// Whether the ingress is annotated as a gRPC backend
    pub looks_like_grpc: bool,
}

impl ApplicationIngress {
    pub fn new(host: String, path: String, looks_like_grpc: bool) -> Self {
        Self {
            host,
            path,
            looks_like_grpc,
        }
    }
}

/// Replica counters of the deployment behind an application endpoint.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    /// Replicas currently available
    pub available_replicas: i32,
    /// Replicas requested by the deployment
    pub replicas: i32,
}

impl DeploymentStatus {
    pub fn new(available_replicas: i32, replicas: i32) -> Self {
        Self {
            available_replicas,
            replicas,
        }
    }
}

/// One deployment of a namespace together with everything the dashboard
/// shows about it.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationEndpoint {
    /// Deployment name
    pub name: String,
    /// Ingresses routing to the deployment's services
    pub ingresses: Vec<ApplicationIngress>,
    /// Annotations of the deployment's pod template
    pub deployment_annotations: BTreeMap<String, String>,
    /// Replica status
    pub deployment_status: DeploymentStatus,
    /// Container images of the pod template
    pub images: Vec<String>,
}

impl ApplicationEndpoint {
    pub fn new(
        name: String,
        ingresses: Vec<ApplicationIngress>,
        deployment_annotations: BTreeMap<String, String>,
        deployment_status: DeploymentStatus,
        images: Vec<String>,
    ) -> Self {
        Self {
            name,
            ingresses,
            deployment_annotations,
            deployment_status,
            images,
        }
    }
}
