//! Artifact assembly phase

use tracing::info;

use super::phase::{CompilationContext, CompilerPhase};
use super::CompiledMonitoring;
use crate::output::{ScrapeConfig, ServiceFragment};

/// Builds the scrape configuration and service fragment from resolved jobs.
///
/// Produces nothing when no job resolved.
pub struct AssemblyPhase;

impl CompilerPhase for AssemblyPhase {
    fn name(&self) -> &str {
        "assembly"
    }

    fn compile(&self, ctx: &CompilationContext<'_>, output: &mut CompiledMonitoring) {
        if output.jobs.is_empty() {
            return;
        }

        output.scrape_config = Some(ScrapeConfig::from_jobs(
            ctx.config.scrape_interval.as_str(),
            &output.jobs,
        ));
        output.service = Some(ServiceFragment::build(&output.instance, &output.ca_bundles));

        info!(
            jobs = output.jobs.len(),
            ca_bundles = output.ca_bundles.len(),
            "assembled Prometheus configuration"
        );
    }
}
