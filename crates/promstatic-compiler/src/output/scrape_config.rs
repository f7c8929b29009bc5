//! The `prometheus.yml` document
//!
//! Field order in the structs is the field order in the rendered YAML, so
//! rendering the same jobs always yields the same bytes.

use promstatic_common::Error;
use serde::Serialize;

use super::job::{ScrapeJob, Scheme};

/// Top-level `global` block
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GlobalConfig {
    /// Default scrape interval
    pub scrape_interval: String,
}

/// One `static_configs` entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticConfig {
    /// `host:port` targets
    pub targets: Vec<String>,
}

/// Job-level `tls_config`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TlsStanza {
    /// CA bundle path inside the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,
    /// Expected server name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
}

/// One `scrape_configs` entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobStanza {
    /// Job name
    pub job_name: String,
    /// HTTP path
    pub metrics_path: String,
    /// Scrape interval
    pub scrape_interval: String,
    /// Scrape protocol
    pub scheme: Scheme,
    /// Static target list (always a single target)
    pub static_configs: Vec<StaticConfig>,
    /// TLS settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsStanza>,
}

impl From<&ScrapeJob> for JobStanza {
    fn from(job: &ScrapeJob) -> Self {
        Self {
            job_name: job.job_name.clone(),
            metrics_path: job.metrics_path.clone(),
            scrape_interval: job.scrape_interval.clone(),
            scheme: job.scheme,
            static_configs: vec![StaticConfig {
                targets: vec![job.target.clone()],
            }],
            tls_config: job.tls.as_ref().map(|tls| TlsStanza {
                ca_file: tls.ca_bundle.as_ref().map(|ca| ca.ca_file()),
                server_name: tls.server_name.clone(),
            }),
        }
    }
}

/// The complete scrape configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScrapeConfig {
    /// Global defaults
    pub global: GlobalConfig,
    /// Jobs in input order
    pub scrape_configs: Vec<JobStanza>,
}

impl ScrapeConfig {
    /// Assemble a configuration from resolved jobs, preserving their order
    pub fn from_jobs(scrape_interval: impl Into<String>, jobs: &[ScrapeJob]) -> Self {
        Self {
            global: GlobalConfig {
                scrape_interval: scrape_interval.into(),
            },
            scrape_configs: jobs.iter().map(JobStanza::from).collect(),
        }
    }

    /// Render as YAML
    pub fn render(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }
}
