//! Typed monitoring resources
//!
//! Only the fields the resolution engine reads are modelled; everything else
//! in a manifest is ignored during deserialization.

mod config_map;
mod prometheus;
mod selector;
mod service;
mod service_monitor;
mod types;

pub use config_map::ConfigMap;
pub use prometheus::{Prometheus, PrometheusSpec};
pub use selector::{LabelSelector, LabelSelectorOperator, LabelSelectorRequirement};
pub use service::{Service, ServicePort, ServiceSpec};
pub use service_monitor::{
    CaSource, ConfigMapKeyRef, Endpoint, ServiceMonitor, ServiceMonitorSpec, TlsConfig,
};
pub use types::{ObjectMeta, PortRef};
