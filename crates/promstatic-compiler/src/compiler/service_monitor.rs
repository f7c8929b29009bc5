//! ServiceMonitor compiler phase
//!
//! Resolves every ServiceMonitor endpoint into a [`ScrapeJob`]:
//!
//! 1. match the selector to one Service (first in discovery order wins)
//! 2. map the Service to its runtime alias
//! 3. per endpoint: resolve the port, scheme, path, interval and TLS material
//!
//! Failures are isolated. A bad ServiceMonitor drops only its own jobs and a
//! bad endpoint drops only itself; both leave a diagnostic behind.

use promstatic_common::crd::{Endpoint, LabelSelector, Service, ServiceMonitor, TlsConfig};
use promstatic_common::Discovered;
use tracing::debug;

use super::phase::{CompilationContext, CompilerPhase};
use super::port::{resolve_port, PortError};
use super::selector::{select_service, ServiceMatch};
use super::{CompiledMonitoring, ResolverConfig};
use crate::diagnostics::Diagnostic;
use crate::output::{CaBundleMount, JobTls, ScrapeJob, Scheme};

/// Path scraped when an endpoint sets none
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Scrape interval when neither the endpoint nor the config sets one
pub const DEFAULT_SCRAPE_INTERVAL: &str = "30s";

/// ConfigMap key assumed when a CA reference names none
pub const DEFAULT_CA_KEY: &str = "ca-certificates.crt";

/// Job name for endpoint `index` of a ServiceMonitor with `endpoint_count` endpoints.
///
/// A single-endpoint monitor keeps its own name; otherwise the 0-based index
/// is appended so names stay unique within the monitor. Clashes across
/// monitors are caught when jobs are recorded: the later job is dropped.
pub fn job_name(monitor: &str, index: usize, endpoint_count: usize) -> String {
    if endpoint_count == 1 {
        monitor.to_string()
    } else {
        format!("{}-{}", monitor, index)
    }
}

/// Jobs and diagnostics produced by one ServiceMonitor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorOutcome {
    /// Jobs in endpoint order
    pub jobs: Vec<ScrapeJob>,
    /// Findings in the order they were made
    pub diagnostics: Vec<Diagnostic>,
}

/// A job, diagnostics, or both, for one endpoint
#[derive(Debug, Default)]
struct EndpointOutcome {
    job: Option<ScrapeJob>,
    diagnostics: Vec<Diagnostic>,
}

impl EndpointOutcome {
    fn dropped(diagnostic: Diagnostic) -> Self {
        Self {
            job: None,
            diagnostics: vec![diagnostic],
        }
    }
}

/// The Service a ServiceMonitor resolved to
struct MonitorTarget<'a> {
    service: &'a Service,
    host: String,
}

/// Compiler phase that turns ServiceMonitors into scrape jobs
pub struct ServiceMonitorPhase;

impl CompilerPhase for ServiceMonitorPhase {
    fn name(&self) -> &str {
        "service-monitor"
    }

    fn compile(&self, ctx: &CompilationContext<'_>, output: &mut CompiledMonitoring) {
        let mut monitors: Vec<&Discovered<ServiceMonitor>> =
            ctx.resources.service_monitors().iter().collect();
        if monitors.is_empty() {
            return;
        }
        monitors.sort_by_key(|m| m.order);

        let jobs_before = output.jobs.len();
        for monitor in monitors {
            let outcome = compile_monitor(ctx, &monitor.resource);
            for diagnostic in outcome.diagnostics {
                output.warn(diagnostic);
            }
            for job in outcome.jobs {
                if output.has_job(&job.job_name) {
                    output.warn(Diagnostic::DuplicateJobName {
                        monitor: monitor.resource.name().to_string(),
                        job: job.job_name,
                    });
                    continue;
                }
                output.push_job(job);
            }
        }

        if output.jobs.len() == jobs_before {
            output.warn(Diagnostic::NoResolvableMonitors);
        }
    }
}

/// Resolve one ServiceMonitor into jobs.
pub fn compile_monitor(ctx: &CompilationContext<'_>, monitor: &ServiceMonitor) -> MonitorOutcome {
    let name = monitor.name();
    let mut outcome = MonitorOutcome::default();

    let selector = &monitor.spec.selector;
    if selector.is_empty() {
        outcome.diagnostics.push(Diagnostic::EmptySelector {
            monitor: name.to_string(),
        });
        return outcome;
    }

    let endpoints = &monitor.spec.endpoints;
    if endpoints.is_empty() {
        outcome.diagnostics.push(Diagnostic::NoEndpoints {
            monitor: name.to_string(),
        });
        return outcome;
    }

    let matched = select_service(selector, ctx.resources.services());
    if let ServiceMatch::Ambiguous { chosen, candidates } = &matched {
        outcome.diagnostics.push(Diagnostic::AmbiguousSelector {
            monitor: name.to_string(),
            chosen: chosen.name().to_string(),
            candidates: candidates.iter().map(|s| s.name().to_string()).collect(),
        });
    }
    let Some(service) = matched.service() else {
        outcome.diagnostics.push(Diagnostic::NoMatchingService {
            monitor: name.to_string(),
            selector: describe_selector(selector),
        });
        return outcome;
    };

    let Some(alias) = ctx.aliases.runtime_name(service.name()) else {
        outcome.diagnostics.push(Diagnostic::UnaliasedService {
            monitor: name.to_string(),
            service: service.name().to_string(),
        });
        return outcome;
    };

    if ctx.is_excluded(alias) {
        debug!(monitor = name, service = alias, "service excluded, skipping");
        return outcome;
    }

    let target = MonitorTarget {
        service,
        host: target_host(ctx.config, alias, service),
    };

    endpoints
        .iter()
        .enumerate()
        .map(|(index, endpoint)| {
            compile_endpoint(ctx, &target, name, index, endpoints.len(), endpoint)
        })
        .fold(outcome, |mut acc, endpoint| {
            acc.jobs.extend(endpoint.job);
            acc.diagnostics.extend(endpoint.diagnostics);
            acc
        })
}

fn compile_endpoint(
    ctx: &CompilationContext<'_>,
    target: &MonitorTarget<'_>,
    monitor: &str,
    index: usize,
    endpoint_count: usize,
    endpoint: &Endpoint,
) -> EndpointOutcome {
    let port = match resolve_port(target.service, endpoint.port.as_ref()) {
        Ok(port) => port,
        Err(PortError::NotFound(port)) => {
            return EndpointOutcome::dropped(Diagnostic::PortNotFound {
                monitor: monitor.to_string(),
                endpoint: index,
                service: target.service.name().to_string(),
                port,
            })
        }
        Err(PortError::NoDeclaredPorts) => {
            return EndpointOutcome::dropped(Diagnostic::NoServicePorts {
                monitor: monitor.to_string(),
                endpoint: index,
                service: target.service.name().to_string(),
            })
        }
    };

    let scheme = match non_empty(&endpoint.scheme) {
        None => Scheme::Http,
        Some(raw) => match raw.parse::<Scheme>() {
            Ok(scheme) => scheme,
            Err(scheme) => {
                return EndpointOutcome::dropped(Diagnostic::UnsupportedScheme {
                    monitor: monitor.to_string(),
                    endpoint: index,
                    scheme,
                })
            }
        },
    };

    let mut diagnostics = Vec::new();
    let tls = match scheme {
        Scheme::Https => endpoint_tls(ctx, monitor, index, endpoint, &mut diagnostics),
        Scheme::Http => None,
    };

    let job = ScrapeJob {
        job_name: job_name(monitor, index, endpoint_count),
        target: format!("{}:{}", target.host, port),
        metrics_path: non_empty(&endpoint.path)
            .unwrap_or(DEFAULT_METRICS_PATH)
            .to_string(),
        scrape_interval: non_empty(&endpoint.interval)
            .unwrap_or(ctx.config.scrape_interval.as_str())
            .to_string(),
        scheme,
        tls,
    };

    debug!(
        job = %job.job_name,
        target = %job.target,
        scheme = %job.scheme,
        "resolved scrape job"
    );

    EndpointOutcome {
        job: Some(job),
        diagnostics,
    }
}

/// TLS settings for an `https` endpoint.
///
/// A missing or unavailable CA never drops the endpoint; the job falls back
/// to system trust and a diagnostic records it.
fn endpoint_tls(
    ctx: &CompilationContext<'_>,
    monitor: &str,
    index: usize,
    endpoint: &Endpoint,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<JobTls> {
    let tls_config = endpoint.tls_config.as_ref();
    let server_name = tls_config
        .and_then(|tls| non_empty(&tls.server_name))
        .map(str::to_string);

    let ca_bundle = match tls_config.and_then(TlsConfig::ca_config_map) {
        None => {
            diagnostics.push(Diagnostic::MissingCaReference {
                monitor: monitor.to_string(),
                endpoint: index,
            });
            None
        }
        Some(cm) if ctx.ca_bundle_available(&cm.name) => Some(CaBundleMount {
            config_map: cm.name.clone(),
            key: non_empty(&cm.key).unwrap_or(DEFAULT_CA_KEY).to_string(),
        }),
        Some(cm) => {
            diagnostics.push(Diagnostic::UnknownCaBundle {
                monitor: monitor.to_string(),
                endpoint: index,
                config_map: cm.name.clone(),
            });
            None
        }
    };

    if ca_bundle.is_none() && server_name.is_none() {
        return None;
    }
    Some(JobTls {
        ca_bundle,
        server_name,
    })
}

fn target_host(config: &ResolverConfig, alias: &str, service: &Service) -> String {
    let namespace = service
        .metadata
        .namespace
        .as_deref()
        .filter(|ns| !ns.is_empty());
    match namespace {
        Some(ns) if config.fqdn_targets => format!("{}.{}.svc.cluster.local", alias, ns),
        _ => alias.to_string(),
    }
}

fn describe_selector(selector: &LabelSelector) -> String {
    let mut parts: Vec<String> = selector
        .match_labels
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    parts.extend(selector.match_expressions.iter().map(|req| {
        format!("{} {:?} ({})", req.key, req.operator, req.values.join(", "))
    }));
    format!("{{{}}}", parts.join(", "))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use promstatic_common::crd::{
        CaSource, ConfigMapKeyRef, ObjectMeta, PortRef, ServicePort, ServiceSpec,
        ServiceMonitorSpec,
    };
    use promstatic_common::ResourceSet;
    use std::collections::{BTreeMap, BTreeSet};

    fn service(name: &str, labels: &[(&str, &str)], ports: Vec<ServicePort>) -> Service {
        Service {
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: Some("monitoring".to_string()),
                labels: labels
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
            spec: ServiceSpec {
                ports,
                ..Default::default()
            },
        }
    }

    fn endpoint(port: &str) -> Endpoint {
        Endpoint {
            port: Some(PortRef::from(port)),
            ..Default::default()
        }
    }

    fn monitor(name: &str, selector: &[(&str, &str)], endpoints: Vec<Endpoint>) -> ServiceMonitor {
        ServiceMonitor {
            metadata: ObjectMeta::named(name),
            spec: ServiceMonitorSpec {
                selector: LabelSelector::from_labels(selector.iter().copied()),
                endpoints,
            },
        }
    }

    fn https_endpoint(port: &str, ca: Option<(&str, Option<&str>)>) -> Endpoint {
        Endpoint {
            port: Some(PortRef::from(port)),
            scheme: Some("https".to_string()),
            tls_config: Some(TlsConfig {
                ca: ca.map(|(name, key)| CaSource {
                    config_map: Some(ConfigMapKeyRef {
                        name: name.to_string(),
                        key: key.map(str::to_string),
                    }),
                }),
                server_name: None,
            }),
            ..Default::default()
        }
    }

    /// Test fixture owning everything a CompilationContext borrows
    struct Fixture {
        resources: ResourceSet,
        aliases: BTreeMap<String, String>,
        config: ResolverConfig,
        ca_bundles: Option<BTreeSet<String>>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut resources = ResourceSet::new();
            resources.add_service(service(
                "metrics-svc",
                &[("app", "demo")],
                vec![ServicePort::named("http", 9100), ServicePort::named("admin", 9200)],
            ));
            Self {
                resources,
                aliases: BTreeMap::from([("metrics-svc".to_string(), "demo-metrics".to_string())]),
                config: ResolverConfig::default(),
                ca_bundles: None,
            }
        }

        fn run(&self, monitor: &ServiceMonitor) -> MonitorOutcome {
            let exclusions: Vec<glob::Pattern> = self
                .config
                .exclude
                .iter()
                .map(|p| glob::Pattern::new(p).unwrap())
                .collect();
            let ctx = CompilationContext {
                resources: &self.resources,
                aliases: &self.aliases,
                ca_bundles: self
                    .ca_bundles
                    .as_ref()
                    .map(|c| c as &dyn crate::lookup::CaBundleCatalog),
                config: &self.config,
                exclusions: &exclusions,
            };
            compile_monitor(&ctx, monitor)
        }
    }

    // =========================================================================
    // Job naming
    // =========================================================================

    #[test]
    fn single_endpoint_keeps_monitor_name() {
        assert_eq!(job_name("demo-sm", 0, 1), "demo-sm");
    }

    #[test]
    fn multiple_endpoints_get_zero_based_suffixes() {
        assert_eq!(job_name("demo-sm", 0, 2), "demo-sm-0");
        assert_eq!(job_name("demo-sm", 1, 2), "demo-sm-1");
    }

    // =========================================================================
    // Happy path
    // =========================================================================

    #[test]
    fn named_port_endpoint_produces_job() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));

        assert!(outcome.diagnostics.is_empty());
        assert_eq!(
            outcome.jobs,
            vec![ScrapeJob {
                job_name: "demo-sm".to_string(),
                target: "demo-metrics:9100".to_string(),
                metrics_path: "/metrics".to_string(),
                scrape_interval: "30s".to_string(),
                scheme: Scheme::Http,
                tls: None,
            }]
        );
    }

    #[test]
    fn two_endpoints_have_distinct_names_and_ports() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "demo-sm",
            &[("app", "demo")],
            vec![endpoint("http"), endpoint("admin")],
        ));

        let jobs: Vec<_> = outcome
            .jobs
            .iter()
            .map(|j| (j.job_name.as_str(), j.target.as_str()))
            .collect();
        assert_eq!(
            jobs,
            vec![("demo-sm-0", "demo-metrics:9100"), ("demo-sm-1", "demo-metrics:9200")]
        );
    }

    #[test]
    fn path_and_interval_overrides() {
        let fixture = Fixture::new();
        let ep = Endpoint {
            path: Some("/stats/prometheus".to_string()),
            interval: Some("10s".to_string()),
            ..endpoint("http")
        };
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![ep]));
        assert_eq!(outcome.jobs[0].metrics_path, "/stats/prometheus");
        assert_eq!(outcome.jobs[0].scrape_interval, "10s");
    }

    #[test]
    fn configured_interval_is_the_default() {
        let mut fixture = Fixture::new();
        fixture.config.scrape_interval = "1m".to_string();
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));
        assert_eq!(outcome.jobs[0].scrape_interval, "1m");
    }

    #[test]
    fn fqdn_targets_use_service_namespace() {
        let mut fixture = Fixture::new();
        fixture.config.fqdn_targets = true;
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));
        assert_eq!(
            outcome.jobs[0].target,
            "demo-metrics.monitoring.svc.cluster.local:9100"
        );
    }

    // =========================================================================
    // Per-monitor failures
    // =========================================================================

    #[test]
    fn unmatched_selector_drops_monitor_with_one_diagnostic() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "lost-sm",
            &[("app", "missing")],
            vec![endpoint("http"), endpoint("admin")],
        ));

        assert!(outcome.jobs.is_empty());
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::NoMatchingService {
                monitor: "lost-sm".to_string(),
                selector: "{app=missing}".to_string(),
            }]
        );
    }

    #[test]
    fn empty_selector_matches_nothing() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor("wild-sm", &[], vec![endpoint("http")]));
        assert!(outcome.jobs.is_empty());
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::EmptySelector {
                monitor: "wild-sm".to_string()
            }]
        );
    }

    #[test]
    fn monitor_without_endpoints_is_reported() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor("empty-sm", &[("app", "demo")], vec![]));
        assert!(outcome.jobs.is_empty());
        assert!(matches!(&outcome.diagnostics[..], [Diagnostic::NoEndpoints { .. }]));
    }

    #[test]
    fn ambiguous_selector_uses_first_service_and_reports() {
        let mut fixture = Fixture::new();
        fixture.resources.add_service(service(
            "metrics-svc-canary",
            &[("app", "demo")],
            vec![ServicePort::named("http", 9999)],
        ));
        fixture
            .aliases
            .insert("metrics-svc-canary".to_string(), "canary".to_string());

        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));

        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.jobs[0].target, "demo-metrics:9100");
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::AmbiguousSelector {
                monitor: "demo-sm".to_string(),
                chosen: "metrics-svc".to_string(),
                candidates: vec!["metrics-svc".to_string(), "metrics-svc-canary".to_string()],
            }]
        );
    }

    #[test]
    fn unaliased_service_drops_monitor() {
        let mut fixture = Fixture::new();
        fixture.aliases.clear();
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));
        assert!(outcome.jobs.is_empty());
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::UnaliasedService {
                monitor: "demo-sm".to_string(),
                service: "metrics-svc".to_string(),
            }]
        );
    }

    #[test]
    fn excluded_service_is_skipped_silently() {
        let mut fixture = Fixture::new();
        fixture.config.exclude = vec!["demo-*".to_string()];
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![endpoint("http")]));
        assert!(outcome.jobs.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    // =========================================================================
    // Per-endpoint failures
    // =========================================================================

    #[test]
    fn unknown_port_name_drops_only_that_endpoint() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "demo-sm",
            &[("app", "demo")],
            vec![endpoint("grpc"), endpoint("http")],
        ));

        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.jobs[0].job_name, "demo-sm-1");
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::PortNotFound {
                monitor: "demo-sm".to_string(),
                endpoint: 0,
                service: "metrics-svc".to_string(),
                port: "grpc".to_string(),
            }]
        );
    }

    #[test]
    fn numeric_port_is_used_without_declaration() {
        let fixture = Fixture::new();
        let ep = Endpoint {
            port: Some(PortRef::Number(8443)),
            ..Default::default()
        };
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![ep]));
        assert_eq!(outcome.jobs[0].target, "demo-metrics:8443");
    }

    #[test]
    fn unsupported_scheme_drops_endpoint() {
        let fixture = Fixture::new();
        let ep = Endpoint {
            scheme: Some("grpc".to_string()),
            ..endpoint("http")
        };
        let outcome = fixture.run(&monitor("demo-sm", &[("app", "demo")], vec![ep]));
        assert!(outcome.jobs.is_empty());
        assert!(matches!(
            &outcome.diagnostics[..],
            [Diagnostic::UnsupportedScheme { scheme, .. }] if scheme == "grpc"
        ));
    }

    // =========================================================================
    // TLS
    // =========================================================================

    #[test]
    fn https_with_ca_reference_mounts_bundle() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "secure-sm",
            &[("app", "demo")],
            vec![https_endpoint("http", Some(("root-ca", Some("ca.crt"))))],
        ));

        assert!(outcome.diagnostics.is_empty());
        let job = &outcome.jobs[0];
        assert_eq!(job.scheme, Scheme::Https);
        let bundle = job.ca_bundle().unwrap();
        assert_eq!(bundle.ca_file(), "/etc/prometheus/ca/root-ca/ca.crt");
    }

    #[test]
    fn ca_key_defaults_to_bundle_file() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "secure-sm",
            &[("app", "demo")],
            vec![https_endpoint("http", Some(("root-ca", None)))],
        ));
        assert_eq!(
            outcome.jobs[0].ca_bundle().unwrap().ca_file(),
            "/etc/prometheus/ca/root-ca/ca-certificates.crt"
        );
    }

    #[test]
    fn https_without_ca_still_emits_job() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&monitor(
            "secure-sm",
            &[("app", "demo")],
            vec![https_endpoint("http", None)],
        ));

        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.jobs[0].scheme, Scheme::Https);
        assert!(outcome.jobs[0].tls.is_none());
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::MissingCaReference {
                monitor: "secure-sm".to_string(),
                endpoint: 0,
            }]
        );
    }

    #[test]
    fn unavailable_ca_bundle_is_reported_without_mount() {
        let mut fixture = Fixture::new();
        fixture.ca_bundles = Some(BTreeSet::from(["other-ca".to_string()]));
        let outcome = fixture.run(&monitor(
            "secure-sm",
            &[("app", "demo")],
            vec![https_endpoint("http", Some(("root-ca", None)))],
        ));

        assert_eq!(outcome.jobs.len(), 1);
        assert!(outcome.jobs[0].ca_bundle().is_none());
        assert!(matches!(
            &outcome.diagnostics[..],
            [Diagnostic::UnknownCaBundle { config_map, .. }] if config_map == "root-ca"
        ));
    }

    #[test]
    fn server_name_is_carried_without_ca() {
        let fixture = Fixture::new();
        let mut ep = https_endpoint("http", None);
        if let Some(tls) = ep.tls_config.as_mut() {
            tls.server_name = Some("metrics.internal".to_string());
        }
        let outcome = fixture.run(&monitor("secure-sm", &[("app", "demo")], vec![ep]));

        let tls = outcome.jobs[0].tls.as_ref().unwrap();
        assert_eq!(tls.server_name.as_deref(), Some("metrics.internal"));
        assert!(tls.ca_bundle.is_none());
    }

    #[test]
    fn tls_config_is_ignored_for_http() {
        let fixture = Fixture::new();
        let ep = Endpoint {
            scheme: Some("http".to_string()),
            ..https_endpoint("http", Some(("root-ca", None)))
        };
        let outcome = fixture.run(&monitor("plain-sm", &[("app", "demo")], vec![ep]));
        assert!(outcome.jobs[0].tls.is_none());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn selector_description_includes_expressions() {
        let selector: LabelSelector = serde_json::from_value(serde_json::json!({
            "matchLabels": {"app": "demo"},
            "matchExpressions": [{"key": "tier", "operator": "In", "values": ["a", "b"]}]
        }))
        .unwrap();
        assert_eq!(describe_selector(&selector), "{app=demo, tier In (a, b)}");
    }
}
