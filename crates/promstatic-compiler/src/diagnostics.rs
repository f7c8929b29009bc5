//! Non-fatal findings reported alongside the (possibly partial) output
//!
//! Nothing here aborts a run. Each variant records which resource, and where
//! relevant which endpoint, was affected and what happened to it.

use std::fmt;

/// A warning produced during resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A Prometheus resource after the first was ignored
    DuplicatePrometheus {
        /// Name of the ignored resource
        name: String,
    },

    /// ServiceMonitor has no selector entries; it matches nothing
    EmptySelector {
        /// ServiceMonitor name
        monitor: String,
    },

    /// ServiceMonitor declares no endpoints
    NoEndpoints {
        /// ServiceMonitor name
        monitor: String,
    },

    /// No Service matches the selector; the ServiceMonitor is dropped
    NoMatchingService {
        /// ServiceMonitor name
        monitor: String,
        /// Rendered selector
        selector: String,
    },

    /// Several Services match; the first in discovery order was used
    AmbiguousSelector {
        /// ServiceMonitor name
        monitor: String,
        /// The Service that was chosen
        chosen: String,
        /// Every matching Service, in discovery order
        candidates: Vec<String>,
    },

    /// The matched Service has no runtime alias; the ServiceMonitor is dropped
    UnaliasedService {
        /// ServiceMonitor name
        monitor: String,
        /// Original Service name
        service: String,
    },

    /// A named port is not declared on the Service; the endpoint is dropped
    PortNotFound {
        /// ServiceMonitor name
        monitor: String,
        /// Endpoint index within the ServiceMonitor
        endpoint: usize,
        /// Original Service name
        service: String,
        /// The unresolved port name
        port: String,
    },

    /// Endpoint has no port and the Service declares none; endpoint dropped
    NoServicePorts {
        /// ServiceMonitor name
        monitor: String,
        /// Endpoint index within the ServiceMonitor
        endpoint: usize,
        /// Original Service name
        service: String,
    },

    /// Scheme is neither `http` nor `https`; endpoint dropped
    UnsupportedScheme {
        /// ServiceMonitor name
        monitor: String,
        /// Endpoint index within the ServiceMonitor
        endpoint: usize,
        /// The scheme as written
        scheme: String,
    },

    /// `https` endpoint without a CA reference; system trust applies
    MissingCaReference {
        /// ServiceMonitor name
        monitor: String,
        /// Endpoint index within the ServiceMonitor
        endpoint: usize,
    },

    /// CA ConfigMap is referenced but not available; no mount is emitted
    UnknownCaBundle {
        /// ServiceMonitor name
        monitor: String,
        /// Endpoint index within the ServiceMonitor
        endpoint: usize,
        /// Referenced ConfigMap name
        config_map: String,
    },

    /// A job name was already taken by an earlier ServiceMonitor; the later job is dropped
    DuplicateJobName {
        /// ServiceMonitor whose job was dropped
        monitor: String,
        /// The clashing job name
        job: String,
    },

    /// ServiceMonitors were present but none produced a scrape job
    NoResolvableMonitors,
}

impl Diagnostic {
    /// The ServiceMonitor this diagnostic concerns, if any
    pub fn monitor(&self) -> Option<&str> {
        match self {
            Self::EmptySelector { monitor }
            | Self::NoEndpoints { monitor }
            | Self::NoMatchingService { monitor, .. }
            | Self::AmbiguousSelector { monitor, .. }
            | Self::UnaliasedService { monitor, .. }
            | Self::PortNotFound { monitor, .. }
            | Self::NoServicePorts { monitor, .. }
            | Self::UnsupportedScheme { monitor, .. }
            | Self::MissingCaReference { monitor, .. }
            | Self::UnknownCaBundle { monitor, .. }
            | Self::DuplicateJobName { monitor, .. } => Some(monitor),
            Self::DuplicatePrometheus { .. } | Self::NoResolvableMonitors => None,
        }
    }

    /// True if the affected endpoint or ServiceMonitor was left out of the output
    pub fn drops_output(&self) -> bool {
        !matches!(
            self,
            Self::DuplicatePrometheus { .. }
                | Self::AmbiguousSelector { .. }
                | Self::MissingCaReference { .. }
                | Self::UnknownCaBundle { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePrometheus { name } => {
                write!(f, "ignored duplicate Prometheus instance: {}", name)
            }
            Self::EmptySelector { monitor } => write!(
                f,
                "ServiceMonitor '{}': selector is empty, skipping",
                monitor
            ),
            Self::NoEndpoints { monitor } => {
                write!(f, "ServiceMonitor '{}': no endpoints, skipping", monitor)
            }
            Self::NoMatchingService { monitor, selector } => write!(
                f,
                "ServiceMonitor '{}': no Service matches selector {}, skipping",
                monitor, selector
            ),
            Self::AmbiguousSelector {
                monitor,
                chosen,
                candidates,
            } => write!(
                f,
                "ServiceMonitor '{}': selector matches {} Services ({}), using '{}'",
                monitor,
                candidates.len(),
                candidates.join(", "),
                chosen
            ),
            Self::UnaliasedService { monitor, service } => write!(
                f,
                "ServiceMonitor '{}': unaliased service '{}', skipping",
                monitor, service
            ),
            Self::PortNotFound {
                monitor,
                endpoint,
                service,
                port,
            } => write!(
                f,
                "ServiceMonitor '{}' endpoint {}: port not found '{}' on Service '{}', skipping endpoint",
                monitor, endpoint, port, service
            ),
            Self::NoServicePorts {
                monitor,
                endpoint,
                service,
            } => write!(
                f,
                "ServiceMonitor '{}' endpoint {}: no port given and Service '{}' declares none, skipping endpoint",
                monitor, endpoint, service
            ),
            Self::UnsupportedScheme {
                monitor,
                endpoint,
                scheme,
            } => write!(
                f,
                "ServiceMonitor '{}' endpoint {}: unsupported scheme '{}', skipping endpoint",
                monitor, endpoint, scheme
            ),
            Self::MissingCaReference { monitor, endpoint } => write!(
                f,
                "ServiceMonitor '{}' endpoint {}: https without CA reference, using system trust",
                monitor, endpoint
            ),
            Self::UnknownCaBundle {
                monitor,
                endpoint,
                config_map,
            } => write!(
                f,
                "ServiceMonitor '{}' endpoint {}: CA configmap '{}' not found, TLS job generated without ca_file",
                monitor, endpoint, config_map
            ),
            Self::DuplicateJobName { monitor, job } => write!(
                f,
                "ServiceMonitor '{}': job name '{}' already in use, skipping job",
                monitor, job
            ),
            Self::NoResolvableMonitors => f.write_str("no resolvable ServiceMonitors found"),
        }
    }
}
