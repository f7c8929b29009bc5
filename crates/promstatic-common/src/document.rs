//! Conversion of untyped manifest documents into a typed, ordered resource set
//!
//! Every accepted document receives a discovery index that increases across
//! the whole input, regardless of kind. "First wins" rules downstream are
//! defined on this index, not on incidental iteration order.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::crd::{ConfigMap, Prometheus, Service, ServiceMonitor};
use crate::{Error, Result};

/// Resource kinds the resolver understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// `monitoring.coreos.com/v1` Prometheus
    Prometheus,
    /// `monitoring.coreos.com/v1` ServiceMonitor
    ServiceMonitor,
    /// core/v1 Service
    Service,
    /// core/v1 ConfigMap
    ConfigMap,
}

impl ResourceKind {
    /// Map a manifest `kind` string, `None` for kinds the resolver ignores
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "Prometheus" => Some(Self::Prometheus),
            "ServiceMonitor" => Some(Self::ServiceMonitor),
            "Service" => Some(Self::Service),
            "ConfigMap" => Some(Self::ConfigMap),
            _ => None,
        }
    }

    /// The manifest `kind` string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prometheus => "Prometheus",
            Self::ServiceMonitor => "ServiceMonitor",
            Self::Service => "Service",
            Self::ConfigMap => "ConfigMap",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource together with its position in input discovery order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovered<T> {
    /// Discovery index across all documents
    pub order: usize,
    /// The typed resource
    pub resource: T,
}

/// Typed snapshot of all input resources relevant to monitoring
#[derive(Clone, Debug, Default)]
pub struct ResourceSet {
    prometheuses: Vec<Discovered<Prometheus>>,
    service_monitors: Vec<Discovered<ServiceMonitor>>,
    services: Vec<Discovered<Service>>,
    config_maps: Vec<Discovered<ConfigMap>>,
    next_order: usize,
    ignored: usize,
}

impl ResourceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from parsed documents, in the order given.
    ///
    /// # Errors
    ///
    /// Returns `Error::Shape` for the first document of a known kind that
    /// does not fit its typed model.
    pub fn from_documents(docs: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut set = Self::new();
        for doc in docs {
            set.push_document(doc)?;
        }
        Ok(set)
    }

    /// Add one parsed document.
    ///
    /// Null documents, documents without a `kind`, and unknown kinds are
    /// skipped. `kind: List` documents are expanded into their `items`.
    pub fn push_document(&mut self, doc: Value) -> Result<()> {
        let kind = match &doc {
            Value::Null => return Ok(()),
            Value::Object(map) => map.get("kind").and_then(Value::as_str).map(str::to_string),
            other => {
                return Err(Error::shape(
                    "document",
                    "?",
                    format!("expected a mapping, found {}", json_type(other)),
                ))
            }
        };

        let Some(kind) = kind else {
            self.ignored += 1;
            debug!("skipping document without kind");
            return Ok(());
        };

        if kind == "List" {
            return self.push_list(doc);
        }

        match ResourceKind::from_kind(&kind) {
            Some(ResourceKind::Prometheus) => {
                let resource = decode(ResourceKind::Prometheus, doc)?;
                self.add_prometheus(resource);
            }
            Some(ResourceKind::ServiceMonitor) => {
                let resource = decode(ResourceKind::ServiceMonitor, doc)?;
                self.add_service_monitor(resource);
            }
            Some(ResourceKind::Service) => {
                let resource = decode(ResourceKind::Service, doc)?;
                self.add_service(resource);
            }
            Some(ResourceKind::ConfigMap) => {
                let resource = decode(ResourceKind::ConfigMap, doc)?;
                self.add_config_map(resource);
            }
            None => {
                self.ignored += 1;
                debug!(kind = %kind, "ignoring unhandled kind");
            }
        }
        Ok(())
    }

    fn push_list(&mut self, mut doc: Value) -> Result<()> {
        match doc.get_mut("items").map(Value::take) {
            None | Some(Value::Null) => Ok(()),
            Some(Value::Array(items)) => items
                .into_iter()
                .try_for_each(|item| self.push_document(item)),
            Some(other) => Err(Error::shape(
                "List",
                "?",
                format!("items must be a sequence, found {}", json_type(&other)),
            )),
        }
    }

    /// Add a Prometheus resource at the next discovery position
    pub fn add_prometheus(&mut self, resource: Prometheus) {
        let order = self.next();
        self.prometheuses.push(Discovered { order, resource });
    }

    /// Add a ServiceMonitor at the next discovery position
    pub fn add_service_monitor(&mut self, resource: ServiceMonitor) {
        let order = self.next();
        self.service_monitors.push(Discovered { order, resource });
    }

    /// Add a Service at the next discovery position
    pub fn add_service(&mut self, resource: Service) {
        let order = self.next();
        self.services.push(Discovered { order, resource });
    }

    /// Add a ConfigMap at the next discovery position
    pub fn add_config_map(&mut self, resource: ConfigMap) {
        let order = self.next();
        self.config_maps.push(Discovered { order, resource });
    }

    fn next(&mut self) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Prometheus resources in discovery order
    pub fn prometheuses(&self) -> &[Discovered<Prometheus>] {
        &self.prometheuses
    }

    /// ServiceMonitors in discovery order
    pub fn service_monitors(&self) -> &[Discovered<ServiceMonitor>] {
        &self.service_monitors
    }

    /// Services in discovery order
    pub fn services(&self) -> &[Discovered<Service>] {
        &self.services
    }

    /// ConfigMaps in discovery order
    pub fn config_maps(&self) -> &[Discovered<ConfigMap>] {
        &self.config_maps
    }

    /// Names of all ConfigMaps, for CA bundle availability checks
    pub fn config_map_names(&self) -> BTreeSet<String> {
        self.config_maps
            .iter()
            .map(|cm| cm.resource.name().to_string())
            .collect()
    }

    /// Number of documents skipped as irrelevant
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

fn decode<T: DeserializeOwned>(kind: ResourceKind, doc: Value) -> Result<T> {
    let name = doc
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::shape(kind.as_str(), "?", "metadata.name is required"))?;

    serde_json::from_value(doc).map_err(|e| Error::shape(kind.as_str(), name, e.to_string()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
