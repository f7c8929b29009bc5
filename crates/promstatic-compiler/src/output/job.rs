//! Resolved scrape jobs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::CA_MOUNT_ROOT;

/// Scrape protocol
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Https => f.write_str("https"),
        }
    }
}

/// A CA bundle ConfigMap mounted into the Prometheus container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaBundleMount {
    /// ConfigMap name
    pub config_map: String,
    /// Key holding the PEM bundle
    pub key: String,
}

impl CaBundleMount {
    /// Directory the ConfigMap is mounted at
    pub fn mount_dir(&self) -> String {
        format!("{}/{}", CA_MOUNT_ROOT, self.config_map)
    }

    /// Path of the bundle file inside the container
    pub fn ca_file(&self) -> String {
        format!("{}/{}", self.mount_dir(), self.key)
    }
}

/// TLS settings carried into a job
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobTls {
    /// Mounted CA bundle, when trust material was resolved
    pub ca_bundle: Option<CaBundleMount>,
    /// Expected server name
    pub server_name: Option<String>,
}

/// One fully resolved scrape job
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeJob {
    /// Job name, unique within the configuration
    pub job_name: String,
    /// `host:port` of the aliased Service
    pub target: String,
    /// HTTP path
    pub metrics_path: String,
    /// Scrape interval
    pub scrape_interval: String,
    /// Scrape protocol
    pub scheme: Scheme,
    /// TLS settings, only for `https` jobs with a CA or server name
    pub tls: Option<JobTls>,
}

impl ScrapeJob {
    /// The CA bundle this job needs mounted, if any
    pub fn ca_bundle(&self) -> Option<&CaBundleMount> {
        self.tls.as_ref().and_then(|tls| tls.ca_bundle.as_ref())
    }
}
