//! Prometheus instance phase
//!
//! At most one Prometheus resource is honoured: the first in discovery order.
//! Fields it leaves unset fall back to defaults one by one.

use promstatic_common::crd::Prometheus;
use promstatic_common::Discovered;
use tracing::info;

use super::phase::{CompilationContext, CompilerPhase};
use super::CompiledMonitoring;
use crate::diagnostics::Diagnostic;

/// Image used when no Prometheus resource names one
pub const DEFAULT_IMAGE: &str = "prom/prometheus";

/// Retention used when no Prometheus resource sets one
pub const DEFAULT_RETENTION: &str = "15d";

/// Parameters of the generated Prometheus service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrometheusInstance {
    /// Name of the Prometheus resource these came from; `None` for defaults
    pub source: Option<String>,
    /// Image repository, possibly already tagged
    pub image: String,
    /// Version without a leading `v`; `None` means latest
    pub version: Option<String>,
    /// TSDB retention duration
    pub retention: String,
}

impl Default for PrometheusInstance {
    fn default() -> Self {
        Self {
            source: None,
            image: DEFAULT_IMAGE.to_string(),
            version: None,
            retention: DEFAULT_RETENTION.to_string(),
        }
    }
}

impl PrometheusInstance {
    /// Instance parameters from a Prometheus resource, defaulting per field
    pub fn from_resource(prometheus: &Prometheus) -> Self {
        let defaults = Self::default();
        let spec = &prometheus.spec;
        Self {
            source: Some(prometheus.name().to_string()),
            image: non_empty(&spec.image).unwrap_or(defaults.image),
            version: non_empty(&spec.version).map(|v| v.trim_start_matches('v').to_string()),
            retention: non_empty(&spec.retention).unwrap_or(defaults.retention),
        }
    }

    /// Full image reference.
    ///
    /// An image that already carries a tag or digest is used as-is. Otherwise
    /// the tag is `v<version>`, or `latest` without a version.
    pub fn image_reference(&self) -> String {
        if has_tag(&self.image) {
            return self.image.clone();
        }
        match &self.version {
            Some(version) => format!("{}:v{}", self.image, version),
            None => format!("{}:latest", self.image),
        }
    }

    /// Startup flag setting TSDB retention
    pub fn retention_flag(&self) -> String {
        format!("--storage.tsdb.retention.time={}", self.retention)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// A registry host may carry a port (`registry:5000/prom`), so only the last
// path segment can hold the tag.
fn has_tag(image: &str) -> bool {
    image.contains('@') || image.rsplit('/').next().is_some_and(|name| name.contains(':'))
}

/// Pick the authoritative Prometheus resource.
///
/// Returns the instance (defaults when `prometheuses` is empty) and one
/// diagnostic per ignored resource.
pub fn resolve_instance(
    prometheuses: &[Discovered<Prometheus>],
) -> (PrometheusInstance, Vec<Diagnostic>) {
    let mut ordered: Vec<&Discovered<Prometheus>> = prometheuses.iter().collect();
    ordered.sort_by_key(|p| p.order);

    let mut ordered = ordered.into_iter();
    let Some(first) = ordered.next() else {
        return (PrometheusInstance::default(), Vec::new());
    };

    let diagnostics = ordered
        .map(|p| Diagnostic::DuplicatePrometheus {
            name: p.resource.name().to_string(),
        })
        .collect();

    (PrometheusInstance::from_resource(&first.resource), diagnostics)
}

/// Compiler phase that resolves the Prometheus instance parameters
pub struct PrometheusInstancePhase;

impl CompilerPhase for PrometheusInstancePhase {
    fn name(&self) -> &str {
        "prometheus-instance"
    }

    fn compile(&self, ctx: &CompilationContext<'_>, output: &mut CompiledMonitoring) {
        let (instance, diagnostics) = resolve_instance(ctx.resources.prometheuses());

        match &instance.source {
            Some(source) => info!(
                prometheus = %source,
                image = %instance.image_reference(),
                retention = %instance.retention,
                "using Prometheus resource"
            ),
            None => info!(
                image = %instance.image_reference(),
                retention = %instance.retention,
                "no Prometheus resource found, using defaults"
            ),
        }

        output.instance = instance;
        for diagnostic in diagnostics {
            output.warn(diagnostic);
        }
    }
}
