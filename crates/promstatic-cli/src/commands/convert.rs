//! Convert command
//!
//! Loads manifests, resolves them, and writes:
//!
//! - `<out>/configmaps/prometheus-scrape-config/prometheus.yml`
//! - `<out>/services/prometheus.yml`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use promstatic_common::yaml::parse_documents;
use promstatic_common::ResourceSet;
use promstatic_compiler::output::{SCRAPE_CONFIG_FILE, SCRAPE_CONFIG_VOLUME, SERVICE_NAME};
use promstatic_compiler::{CaBundleCatalog, CompiledMonitoring, MonitoringCompiler};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{load_aliases, load_config, CONFIG_ENV, OUTPUT_DIR_ENV};
use crate::{Error, Result};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Manifest files or directories (directories are walked recursively)
    #[arg(short = 'f', long = "manifests", required = true, num_args = 1..)]
    pub manifests: Vec<PathBuf>,

    /// YAML mapping of Service name to runtime service name
    #[arg(long)]
    pub aliases: PathBuf,

    /// Resolver settings file
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Directory the artifacts are written under
    #[arg(long, env = OUTPUT_DIR_ENV, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the artifacts to stdout instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// CA bundle ConfigMap provided outside the manifests (repeatable)
    #[arg(long = "ca-bundle", value_name = "NAME")]
    pub ca_bundles: Vec<String>,

    /// Treat every referenced CA bundle ConfigMap as available
    #[arg(long, conflicts_with = "ca_bundles")]
    pub trust_all_ca_bundles: bool,
}

impl ConvertArgs {
    /// ConfigMaps a CA reference may name: input ConfigMaps plus `--ca-bundle`.
    ///
    /// `None` with `--trust-all-ca-bundles`.
    pub fn ca_catalog(&self, resources: &ResourceSet) -> Option<BTreeSet<String>> {
        if self.trust_all_ca_bundles {
            return None;
        }
        let mut catalog = resources.config_map_names();
        catalog.extend(self.ca_bundles.iter().cloned());
        Some(catalog)
    }
}

/// Rendered output files, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub files: Vec<(PathBuf, String)>,
}

impl Artifacts {
    /// Render both artifacts, `None` when nothing resolved
    pub fn render(compiled: &CompiledMonitoring) -> Result<Option<Self>> {
        let (Some(scrape_config), Some(service)) =
            (compiled.render_scrape_config()?, compiled.render_service()?)
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            files: vec![
                (scrape_config_path(), scrape_config),
                (service_path(), service),
            ],
        }))
    }

    /// Write every file under `root`, creating directories as needed
    pub fn write(&self, root: &Path) -> Result<()> {
        for (relative, contents) in &self.files {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::input(parent, e))?;
            }
            std::fs::write(&path, contents).map_err(|e| Error::input(&path, e))?;
            info!(path = %path.display(), "wrote artifact");
        }
        Ok(())
    }

    /// Print every file with a path header
    pub fn print(&self) {
        for (i, (relative, contents)) in self.files.iter().enumerate() {
            if i > 0 {
                println!("---");
            }
            println!("# {}", relative.display());
            print!("{}", contents);
        }
    }
}

fn scrape_config_path() -> PathBuf {
    Path::new("configmaps")
        .join(SCRAPE_CONFIG_VOLUME)
        .join(SCRAPE_CONFIG_FILE)
}

fn service_path() -> PathBuf {
    Path::new("services").join(format!("{}.yml", SERVICE_NAME))
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let aliases = load_aliases(&args.aliases)?;
    let resources = load_resources(&args.manifests)?;

    let compiler = MonitoringCompiler::new(config)?;
    debug!(
        scrape_interval = %compiler.config().scrape_interval,
        excludes = compiler.config().exclude.len(),
        "resolver configured"
    );
    let catalog = args.ca_catalog(&resources);
    let compiled = compiler.compile(
        &resources,
        &aliases,
        catalog.as_ref().map(|c| c as &dyn CaBundleCatalog),
    );

    for diagnostic in &compiled.diagnostics {
        let monitor = diagnostic.monitor().unwrap_or("-");
        if diagnostic.drops_output() {
            warn!(monitor, "{}", diagnostic);
        } else {
            info!(monitor, "{}", diagnostic);
        }
    }

    let Some(artifacts) = Artifacts::render(&compiled)? else {
        warn!("no scrape jobs resolved, nothing written");
        return Ok(());
    };

    info!(
        jobs = compiled.jobs.len(),
        diagnostics = compiled.diagnostics.len(),
        "conversion complete"
    );

    if args.dry_run {
        artifacts.print();
        Ok(())
    } else {
        artifacts.write(&args.output_dir)
    }
}

/// Parse every manifest file into one resource set, in file order.
pub fn load_resources(paths: &[PathBuf]) -> Result<ResourceSet> {
    let files = collect_manifest_files(paths)?;
    if files.is_empty() {
        return Err(Error::validation("no manifest files found"));
    }

    let mut resources = ResourceSet::new();
    for file in &files {
        let text = std::fs::read_to_string(file).map_err(|e| Error::input(file, e))?;
        let docs = parse_documents(&text).map_err(|e| Error::input(file, e))?;
        debug!(path = %file.display(), documents = docs.len(), "loaded manifest file");
        for doc in docs {
            resources
                .push_document(doc)
                .map_err(|e| Error::input(file, e))?;
        }
    }

    debug!(ignored = resources.ignored(), "skipped unrelated documents");
    Ok(resources)
}

/// Expand directories into their YAML files.
///
/// Explicit file arguments are kept as given. Directories contribute every
/// `.yaml`/`.yml` file below them in sorted path order.
pub fn collect_manifest_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(Error::input(path, "no such file or directory"));
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::input(dir, e))?;
        if entry.file_type().is_file() && is_yaml(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
