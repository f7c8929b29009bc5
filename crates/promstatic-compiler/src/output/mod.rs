//! Output artifacts
//!
//! - [`ScrapeJob`]: one resolved scrape target
//! - [`ScrapeConfig`]: the `prometheus.yml` document
//! - [`ServiceFragment`]: the generated Prometheus service definition

mod job;
mod scrape_config;
mod service_fragment;

pub use job::{CaBundleMount, JobTls, ScrapeJob, Scheme};
pub use scrape_config::{GlobalConfig, JobStanza, ScrapeConfig, StaticConfig, TlsStanza};
pub use service_fragment::{ServiceFragment, VolumeMount, PROMETHEUS_PORT, SERVICE_NAME};

/// Name of the generated configuration volume holding `prometheus.yml`
pub const SCRAPE_CONFIG_VOLUME: &str = "prometheus-scrape-config";

/// File name of the scrape configuration inside its volume
pub const SCRAPE_CONFIG_FILE: &str = "prometheus.yml";

/// Where the scrape configuration is mounted in the Prometheus container
pub const SCRAPE_CONFIG_MOUNT_PATH: &str = "/etc/prometheus/prometheus.yml";

/// Root under which CA bundle ConfigMaps are mounted
pub const CA_MOUNT_ROOT: &str = "/etc/prometheus/ca";

/// Host-side directory holding generated ConfigMap contents
pub const CONFIGMAP_DIR: &str = "./configmaps";
