//! Convert command against manifests on disk

use std::fs;
use std::path::{Path, PathBuf};

use promstatic_cli::commands::convert::{load_resources, run, ConvertArgs};
use serde_yaml::Value;
use tempfile::TempDir;

const MANIFESTS: &str = r#"
apiVersion: monitoring.coreos.com/v1
kind: Prometheus
metadata:
  name: k8s
spec:
  version: "2.53.0"
  retention: 7d
---
apiVersion: v1
kind: Service
metadata:
  name: metrics-svc
  labels:
    app: demo
spec:
  ports:
    - name: http
      port: 9100
---
apiVersion: monitoring.coreos.com/v1
kind: ServiceMonitor
metadata:
  name: demo-sm
spec:
  selector:
    matchLabels:
      app: demo
  endpoints:
    - port: http
      scheme: https
      tlsConfig:
        ca:
          configMap:
            name: root-ca
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: ignored
"#;

const CA_CONFIG_MAP: &str = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: root-ca
data:
  ca-certificates.crt: ""
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("manifests/certs")).unwrap();
        fs::write(dir.path().join("manifests/app.yaml"), MANIFESTS).unwrap();
        fs::write(dir.path().join("manifests/certs/ca.yml"), CA_CONFIG_MAP).unwrap();
        fs::write(dir.path().join("aliases.yaml"), "metrics-svc: demo-metrics\n").unwrap();
        Self { dir }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    fn args(&self) -> ConvertArgs {
        ConvertArgs {
            manifests: vec![self.path("manifests")],
            aliases: self.path("aliases.yaml"),
            config: None,
            output_dir: self.path("out"),
            dry_run: false,
            ca_bundles: Vec::new(),
            trust_all_ca_bundles: false,
        }
    }
}

fn read_yaml(path: &Path) -> Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_both_artifacts() {
    let ws = Workspace::new();
    run(ws.args()).unwrap();

    let scrape = read_yaml(&ws.path("out/configmaps/prometheus-scrape-config/prometheus.yml"));
    let job = &scrape["scrape_configs"][0];
    assert_eq!(job["job_name"].as_str(), Some("demo-sm"));
    assert_eq!(job["scheme"].as_str(), Some("https"));
    assert_eq!(
        job["static_configs"][0]["targets"][0].as_str(),
        Some("demo-metrics:9100")
    );
    assert_eq!(
        job["tls_config"]["ca_file"].as_str(),
        Some("/etc/prometheus/ca/root-ca/ca-certificates.crt")
    );

    let service = read_yaml(&ws.path("out/services/prometheus.yml"));
    let prometheus = &service["prometheus"];
    assert_eq!(prometheus["image"].as_str(), Some("prom/prometheus:v2.53.0"));
    assert_eq!(
        prometheus["command"][1].as_str(),
        Some("--storage.tsdb.retention.time=7d")
    );
    assert_eq!(
        prometheus["volumes"][1].as_str(),
        Some("./configmaps/root-ca:/etc/prometheus/ca/root-ca:ro")
    );
}

#[test]
fn output_is_stable_across_runs() {
    let ws = Workspace::new();
    let target = ws.path("out/configmaps/prometheus-scrape-config/prometheus.yml");

    run(ws.args()).unwrap();
    let first = fs::read_to_string(&target).unwrap();
    run(ws.args()).unwrap();
    let second = fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn dry_run_writes_nothing() {
    let ws = Workspace::new();
    let args = ConvertArgs {
        dry_run: true,
        ..ws.args()
    };
    run(args).unwrap();
    assert!(!ws.path("out").exists());
}

#[test]
fn unresolved_input_writes_nothing() {
    let ws = Workspace::new();
    fs::write(ws.path("aliases.yaml"), "").unwrap();
    run(ws.args()).unwrap();
    assert!(!ws.path("out").exists());
}

#[test]
fn config_file_is_applied() {
    let ws = Workspace::new();
    fs::write(ws.path("config.yaml"), "scrapeInterval: 1m\n").unwrap();
    let args = ConvertArgs {
        config: Some(ws.path("config.yaml")),
        ..ws.args()
    };
    run(args).unwrap();

    let scrape = read_yaml(&ws.path("out/configmaps/prometheus-scrape-config/prometheus.yml"));
    assert_eq!(scrape["global"]["scrape_interval"].as_str(), Some("1m"));
    assert_eq!(
        scrape["scrape_configs"][0]["scrape_interval"].as_str(),
        Some("1m")
    );
}

#[test]
fn invalid_exclude_pattern_fails() {
    let ws = Workspace::new();
    fs::write(ws.path("config.yaml"), "exclude: ['[oops']\n").unwrap();
    let args = ConvertArgs {
        config: Some(ws.path("config.yaml")),
        ..ws.args()
    };
    assert!(run(args).is_err());
}

#[test]
fn resources_keep_file_discovery_order() {
    let ws = Workspace::new();
    let resources = load_resources(&[ws.path("manifests")]).unwrap();

    assert_eq!(resources.prometheuses().len(), 1);
    assert_eq!(resources.services().len(), 1);
    assert_eq!(resources.service_monitors().len(), 1);
    assert_eq!(resources.ignored(), 1);
    // app.yaml sorts before certs/ca.yml
    assert!(resources.config_maps()[0].order > resources.service_monitors()[0].order);
}

#[test]
fn empty_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_resources(&[dir.path().to_path_buf()]).is_err());
}

#[test]
fn malformed_manifest_names_the_file() {
    let ws = Workspace::new();
    fs::write(
        ws.path("manifests/broken.yaml"),
        "kind: Service\nmetadata:\n  name: broken\nspec:\n  ports: nope\n",
    )
    .unwrap();

    let err = load_resources(&[ws.path("manifests")]).unwrap_err();
    assert!(err.to_string().contains("broken.yaml"), "{}", err);
}

fn ca_file(ws: &Workspace) -> Option<String> {
    let scrape = read_yaml(&ws.path("out/configmaps/prometheus-scrape-config/prometheus.yml"));
    scrape["scrape_configs"][0]["tls_config"]["ca_file"]
        .as_str()
        .map(str::to_string)
}

#[test]
fn external_ca_bundle_is_not_mounted_by_default() {
    let ws = Workspace::new();
    fs::remove_file(ws.path("manifests/certs/ca.yml")).unwrap();
    run(ws.args()).unwrap();

    assert_eq!(ca_file(&ws), None);
    let service = read_yaml(&ws.path("out/services/prometheus.yml"));
    assert_eq!(service["prometheus"]["volumes"].as_sequence().unwrap().len(), 1);
}

#[test]
fn ca_bundle_flag_adds_to_catalog() {
    let ws = Workspace::new();
    fs::remove_file(ws.path("manifests/certs/ca.yml")).unwrap();
    let args = ConvertArgs {
        ca_bundles: vec!["root-ca".to_string()],
        ..ws.args()
    };
    run(args).unwrap();

    assert_eq!(
        ca_file(&ws).as_deref(),
        Some("/etc/prometheus/ca/root-ca/ca-certificates.crt")
    );
    let service = read_yaml(&ws.path("out/services/prometheus.yml"));
    assert_eq!(
        service["prometheus"]["volumes"][1].as_str(),
        Some("./configmaps/root-ca:/etc/prometheus/ca/root-ca:ro")
    );
}

#[test]
fn trust_all_ca_bundles_skips_catalog() {
    let ws = Workspace::new();
    fs::remove_file(ws.path("manifests/certs/ca.yml")).unwrap();
    let args = ConvertArgs {
        trust_all_ca_bundles: true,
        ..ws.args()
    };
    assert!(args.ca_catalog(&load_resources(&args.manifests).unwrap()).is_none());
    run(args).unwrap();

    assert_eq!(
        ca_file(&ws).as_deref(),
        Some("/etc/prometheus/ca/root-ca/ca-certificates.crt")
    );
}

#[test]
fn catalog_merges_input_and_flag_names() {
    let ws = Workspace::new();
    let args = ConvertArgs {
        ca_bundles: vec!["generated-ca".to_string()],
        ..ws.args()
    };
    let catalog = args
        .ca_catalog(&load_resources(&args.manifests).unwrap())
        .unwrap();
    assert_eq!(
        catalog.into_iter().collect::<Vec<_>>(),
        vec!["generated-ca".to_string(), "root-ca".to_string()]
    );
}
