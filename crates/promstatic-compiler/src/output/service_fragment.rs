//! The generated Prometheus service definition

use std::collections::BTreeMap;
use std::fmt;

use promstatic_common::Error;
use serde::{Serialize, Serializer};

use super::job::CaBundleMount;
use super::{CONFIGMAP_DIR, SCRAPE_CONFIG_FILE, SCRAPE_CONFIG_MOUNT_PATH, SCRAPE_CONFIG_VOLUME};
use crate::compiler::PrometheusInstance;

/// Service name of the generated Prometheus
pub const SERVICE_NAME: &str = "prometheus";

/// Prometheus web/API port
pub const PROMETHEUS_PORT: u16 = 9090;

/// A bind mount, rendered as `source:target[:ro]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeMount {
    /// Host-side path
    pub source: String,
    /// Container path
    pub target: String,
    /// Mount read-only
    pub read_only: bool,
}

impl VolumeMount {
    /// Read-only mount
    pub fn read_only(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            read_only: true,
        }
    }

    /// Mount of the generated scrape configuration
    pub fn scrape_config() -> Self {
        Self::read_only(
            format!(
                "{}/{}/{}",
                CONFIGMAP_DIR, SCRAPE_CONFIG_VOLUME, SCRAPE_CONFIG_FILE
            ),
            SCRAPE_CONFIG_MOUNT_PATH,
        )
    }

    /// Directory mount of a CA bundle ConfigMap
    pub fn ca_bundle(bundle: &CaBundleMount) -> Self {
        Self::read_only(
            format!("{}/{}", CONFIGMAP_DIR, bundle.config_map),
            bundle.mount_dir(),
        )
    }
}

impl fmt::Display for VolumeMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.target)?;
        if self.read_only {
            f.write_str(":ro")?;
        }
        Ok(())
    }
}

impl Serialize for VolumeMount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Service definition for the generated Prometheus
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceFragment {
    /// Image reference including tag
    pub image: String,
    /// Restart policy
    pub restart: String,
    /// Prometheus command-line flags
    pub command: Vec<String>,
    /// Scrape config mount first, then CA bundle mounts
    pub volumes: Vec<VolumeMount>,
    /// Published ports
    pub ports: Vec<String>,
}

impl ServiceFragment {
    /// Build the service from the resolved instance and the CA bundles jobs need.
    ///
    /// `ca_bundles` are mounted in the given order; duplicates by ConfigMap
    /// name are mounted once.
    pub fn build(instance: &PrometheusInstance, ca_bundles: &[CaBundleMount]) -> Self {
        let mut volumes = vec![VolumeMount::scrape_config()];
        let mut seen = std::collections::BTreeSet::new();
        for bundle in ca_bundles {
            if seen.insert(bundle.config_map.as_str()) {
                volumes.push(VolumeMount::ca_bundle(bundle));
            }
        }

        Self {
            image: instance.image_reference(),
            restart: "always".to_string(),
            command: vec![
                format!("--config.file={}", SCRAPE_CONFIG_MOUNT_PATH),
                instance.retention_flag(),
            ],
            volumes,
            ports: vec![format!("{}:{}", PROMETHEUS_PORT, PROMETHEUS_PORT)],
        }
    }

    /// Render as a YAML mapping `prometheus: {...}`
    pub fn render(&self) -> Result<String, Error> {
        let services = BTreeMap::from([(SERVICE_NAME, self)]);
        serde_yaml::to_string(&services).map_err(|e| Error::serialization(e.to_string()))
    }
}
