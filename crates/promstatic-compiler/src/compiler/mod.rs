//! Monitoring compiler
//!
//! Resolves a [`ResourceSet`] into scrape jobs, a scrape configuration and a
//! Prometheus service fragment.
//!
//! # Usage
//!
//! ```text
//! let compiler = MonitoringCompiler::new(ResolverConfig::default())?;
//! let compiled = compiler.compile(&resources, &aliases, Some(&config_map_names));
//! // compiled.jobs, compiled.scrape_config, compiled.service, compiled.diagnostics
//! ```
//!
//! # Phases
//!
//! 1. [`PrometheusInstancePhase`]: image, version and retention from the first
//!    Prometheus resource, or defaults
//! 2. [`ServiceMonitorPhase`]: one [`ScrapeJob`] per resolvable endpoint
//! 3. [`AssemblyPhase`]: scrape configuration and service fragment

mod assemble;
mod phase;
mod port;
mod prometheus;
mod selector;
mod service_monitor;

pub use assemble::AssemblyPhase;
pub use phase::{CompilationContext, CompilerPhase};
pub use port::{resolve_port, PortError};
pub use prometheus::{
    resolve_instance, PrometheusInstance, PrometheusInstancePhase, DEFAULT_IMAGE,
    DEFAULT_RETENTION,
};
pub use selector::{select_service, ServiceMatch};
pub use service_monitor::{
    compile_monitor, job_name, MonitorOutcome, ServiceMonitorPhase, DEFAULT_CA_KEY,
    DEFAULT_METRICS_PATH, DEFAULT_SCRAPE_INTERVAL,
};

use glob::Pattern;
use promstatic_common::{Error, ResourceSet};
use serde::Deserialize;
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::lookup::{AliasLookup, CaBundleCatalog};
use crate::output::{CaBundleMount, ScrapeConfig, ScrapeJob, ServiceFragment};

/// Errors that can occur while setting up the compiler
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// An exclude pattern is not a valid glob
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidExcludePattern {
        /// The pattern as configured
        pattern: String,
        /// Parser message
        message: String,
    },
}

/// Resolver settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Glob patterns over runtime service names whose monitors are skipped
    pub exclude: Vec<String>,
    /// Global and per-job default scrape interval
    pub scrape_interval: String,
    /// Use `<alias>.<namespace>.svc.cluster.local` targets when a namespace is known
    pub fqdn_targets: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            scrape_interval: DEFAULT_SCRAPE_INTERVAL.to_string(),
            fqdn_targets: false,
        }
    }
}

impl ResolverConfig {
    fn exclusions(&self) -> Result<Vec<Pattern>, CompileError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|e| CompileError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// Everything produced by one compilation run
#[derive(Clone, Debug, Default)]
pub struct CompiledMonitoring {
    /// Resolved Prometheus instance (defaults when no resource exists)
    pub instance: PrometheusInstance,
    /// Scrape jobs in ServiceMonitor/endpoint input order
    pub jobs: Vec<ScrapeJob>,
    /// CA bundles to mount, unique by ConfigMap name, first-seen order
    pub ca_bundles: Vec<CaBundleMount>,
    /// Scrape configuration; `None` when no job resolved
    pub scrape_config: Option<ScrapeConfig>,
    /// Prometheus service fragment; `None` when no job resolved
    pub service: Option<ServiceFragment>,
    /// Findings in the order they were made
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledMonitoring {
    /// Create empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a job, registering its CA bundle once per ConfigMap name
    pub fn push_job(&mut self, job: ScrapeJob) {
        if let Some(bundle) = job.ca_bundle() {
            if !self
                .ca_bundles
                .iter()
                .any(|b| b.config_map == bundle.config_map)
            {
                self.ca_bundles.push(bundle.clone());
            }
        }
        self.jobs.push(job);
    }

    /// True if a job with this name was already recorded
    pub fn has_job(&self, job_name: &str) -> bool {
        self.jobs.iter().any(|job| job.job_name == job_name)
    }

    /// Record a diagnostic
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        debug!(diagnostic = %diagnostic, "resolution diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Check if any artifacts were generated
    pub fn has_artifacts(&self) -> bool {
        self.scrape_config.is_some() && self.service.is_some()
    }

    /// Render the scrape configuration, if one was generated
    pub fn render_scrape_config(&self) -> Result<Option<String>, Error> {
        self.scrape_config.as_ref().map(ScrapeConfig::render).transpose()
    }

    /// Render the service fragment, if one was generated
    pub fn render_service(&self) -> Result<Option<String>, Error> {
        self.service.as_ref().map(ServiceFragment::render).transpose()
    }
}

/// Runs the resolution phases over a resource snapshot.
///
/// Holds no state between runs; the same inputs always produce the same output.
pub struct MonitoringCompiler {
    config: ResolverConfig,
    exclusions: Vec<Pattern>,
    phases: Vec<Box<dyn CompilerPhase>>,
}

impl MonitoringCompiler {
    /// Create a compiler with the standard phase pipeline
    ///
    /// # Errors
    ///
    /// Returns `CompileError::InvalidExcludePattern` if an exclude glob does not parse.
    pub fn new(config: ResolverConfig) -> Result<Self, CompileError> {
        let exclusions = config.exclusions()?;
        Ok(Self {
            config,
            exclusions,
            phases: vec![
                Box::new(PrometheusInstancePhase),
                Box::new(ServiceMonitorPhase),
                Box::new(AssemblyPhase),
            ],
        })
    }

    /// Resolver settings in use
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve all monitoring resources.
    ///
    /// `ca_bundles` lists the ConfigMaps that will exist in the output; pass
    /// `None` to treat every CA reference as available.
    pub fn compile(
        &self,
        resources: &ResourceSet,
        aliases: &dyn AliasLookup,
        ca_bundles: Option<&dyn CaBundleCatalog>,
    ) -> CompiledMonitoring {
        let ctx = CompilationContext {
            resources,
            aliases,
            ca_bundles,
            config: &self.config,
            exclusions: &self.exclusions,
        };

        let mut output = CompiledMonitoring::new();
        for phase in &self.phases {
            debug!(phase = phase.name(), "running compiler phase");
            phase.compile(&ctx, &mut output);
        }
        output
    }
}
