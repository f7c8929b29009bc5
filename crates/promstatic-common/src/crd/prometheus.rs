//! `monitoring.coreos.com/v1` Prometheus

use serde::{Deserialize, Serialize};

use super::types::{null_as_default, ObjectMeta};

/// Prometheus spec fields copied into the generated service
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PrometheusSpec {
    /// Container image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Prometheus version, with or without a leading `v`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// TSDB retention duration (e.g. `15d`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<String>,
}

/// Prometheus resource
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Prometheus {
    /// Object metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,

    /// Prometheus spec
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: PrometheusSpec,
}

impl Prometheus {
    /// Resource name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
