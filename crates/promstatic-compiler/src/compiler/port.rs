//! Named-port resolution
//!
//! Scrape targets address the Service, so the result is always the Service
//! port number, never the pod-side `targetPort`.

use promstatic_common::crd::{PortRef, Service};

/// Why an endpoint port could not be resolved
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// No declared port carries this name
    #[error("port not found: {0}")]
    NotFound(String),
    /// No port was given and the Service declares none
    #[error("service declares no ports")]
    NoDeclaredPorts,
}

/// Resolve an endpoint port reference against the matched Service.
///
/// - numeric references pass through without a declared-port match
/// - names must match a declared port exactly
/// - a missing or blank reference uses the first declared port
pub fn resolve_port(service: &Service, port: Option<&PortRef>) -> Result<u16, PortError> {
    let port = port.filter(|p| !matches!(p, PortRef::Name(name) if name.trim().is_empty()));
    let Some(port) = port else {
        return service
            .spec
            .ports
            .first()
            .map(|p| p.port)
            .ok_or(PortError::NoDeclaredPorts);
    };

    if let Some(number) = port.number() {
        return Ok(number);
    }

    let name = port.to_string();
    service
        .port_named(&name)
        .map(|p| p.port)
        .ok_or(PortError::NotFound(name))
}
