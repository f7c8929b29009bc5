//! Compiler phases
//!
//! A `CompilerPhase` reads the immutable [`CompilationContext`] and adds to
//! the shared [`CompiledMonitoring`] output. Phases run in a fixed order:
//! Prometheus instance, ServiceMonitors, then artifact assembly.

use glob::Pattern;
use promstatic_common::ResourceSet;

use super::{CompiledMonitoring, ResolverConfig};
use crate::lookup::{AliasLookup, CaBundleCatalog};

/// Immutable context available to all compiler phases.
pub struct CompilationContext<'a> {
    /// Input resources in discovery order
    pub resources: &'a ResourceSet,
    /// Original Service name -> runtime service name
    pub aliases: &'a dyn AliasLookup,
    /// Available CA bundle ConfigMaps; `None` treats every reference as available
    pub ca_bundles: Option<&'a dyn CaBundleCatalog>,
    /// Resolver settings
    pub config: &'a ResolverConfig,
    /// Compiled `config.exclude` patterns
    pub exclusions: &'a [Pattern],
}

impl CompilationContext<'_> {
    /// True if the runtime service name matches an exclude pattern
    pub fn is_excluded(&self, runtime_name: &str) -> bool {
        self.exclusions.iter().any(|p| p.matches(runtime_name))
    }

    /// True if the CA bundle ConfigMap can be mounted
    pub fn ca_bundle_available(&self, config_map: &str) -> bool {
        self.ca_bundles
            .is_none_or(|catalog| catalog.has_bundle(config_map))
    }
}

/// A step in the resolution pipeline.
///
/// Phases never fail: problems with individual resources are recorded in
/// `output.diagnostics` and the affected item is left out.
pub trait CompilerPhase: Send + Sync {
    /// Human-readable name for this phase (used in logging)
    fn name(&self) -> &str;

    /// Run this phase, adding to `output`
    fn compile(&self, ctx: &CompilationContext<'_>, output: &mut CompiledMonitoring);
}
