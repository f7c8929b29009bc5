//! `monitoring.coreos.com/v1` ServiceMonitor

use serde::{Deserialize, Serialize};

use super::selector::LabelSelector;
use super::types::{null_as_default, ObjectMeta, PortRef};

/// Reference to one key of a ConfigMap
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConfigMapKeyRef {
    /// ConfigMap name
    pub name: String,

    /// Key within the ConfigMap holding the bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Source of CA trust material
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaSource {
    /// CA bundle stored in a ConfigMap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapKeyRef>,
}

/// Endpoint TLS settings
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    /// Trust anchors used to verify the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<CaSource>,

    /// Expected server name in the target certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
}

impl TlsConfig {
    /// The referenced CA ConfigMap, if any
    pub fn ca_config_map(&self) -> Option<&ConfigMapKeyRef> {
        self.ca
            .as_ref()
            .and_then(|ca| ca.config_map.as_ref())
            .filter(|cm| !cm.name.is_empty())
    }
}

/// One scrape endpoint of a ServiceMonitor
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Service port name or number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortRef>,

    /// HTTP path to scrape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// `http` or `https`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Scrape interval (Prometheus duration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// TLS settings for `https` endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
}

/// ServiceMonitor spec
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceMonitorSpec {
    /// Selects the target Service by its labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub selector: LabelSelector,

    /// Endpoints, in declared order
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoints: Vec<Endpoint>,
}

/// ServiceMonitor resource
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceMonitor {
    /// Object metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,

    /// ServiceMonitor spec
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: ServiceMonitorSpec,
}

impl ServiceMonitor {
    /// Resource name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
