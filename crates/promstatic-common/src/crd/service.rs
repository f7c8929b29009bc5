//! Kubernetes `Service` as seen by the resolver
//!
//! Services are produced by other converters in the host pipeline; the
//! resolver only reads their labels and declared ports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{null_as_default, ObjectMeta, PortRef};

/// A declared Service port
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    /// Port name (required by Kubernetes only when several ports exist)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Service port number; the scrape target
    pub port: u16,

    /// Pod-side port; never used for scraping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<PortRef>,
}

impl ServicePort {
    /// Named port with no target override
    pub fn named(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: Some(name.into()),
            port,
            target_port: None,
        }
    }
}

/// Service spec fields used for matching and port resolution
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Declared ports, in manifest order
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ports: Vec<ServicePort>,

    /// Pod selector
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub selector: BTreeMap<String, String>,
}

/// Kubernetes Service
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Service {
    /// Object metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,

    /// Service spec
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: ServiceSpec,
}

impl Service {
    /// Original (pre-alias) name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Labels a ServiceMonitor selector is matched against.
    ///
    /// `metadata.labels` when present; otherwise `spec.selector`, which Helm
    /// charts conventionally keep identical to the Service labels.
    pub fn selectable_labels(&self) -> &BTreeMap<String, String> {
        if self.metadata.labels.is_empty() {
            &self.spec.selector
        } else {
            &self.metadata.labels
        }
    }

    /// Find a declared port by name
    pub fn port_named(&self, name: &str) -> Option<&ServicePort> {
        self.spec
            .ports
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }
}
