//! Static resolution of Prometheus and ServiceMonitor resources
//!
//! This crate turns a snapshot of monitoring resources into a flat Prometheus
//! scrape configuration and a companion service definition:
//!
//! - **Compiler**: phase pipeline (instance defaults, ServiceMonitor
//!   resolution, artifact assembly) over a [`ResourceSet`](promstatic_common::ResourceSet)
//! - **Diagnostics**: non-fatal findings collected alongside partial output
//! - **Lookup**: injected alias and CA-bundle tables
//! - **Output**: scrape-config document and service fragment types
//!
//! Resolution is a pure function of its inputs. Nothing here performs I/O.

#![deny(missing_docs)]

pub mod compiler;
pub mod diagnostics;
pub mod lookup;
pub mod output;

pub use compiler::{CompileError, CompiledMonitoring, MonitoringCompiler, ResolverConfig};
pub use diagnostics::Diagnostic;
pub use lookup::{AliasLookup, CaBundleCatalog};

/// Resource kinds this converter claims in a host pipeline
pub const HANDLED_KINDS: [&str; 2] = ["Prometheus", "ServiceMonitor"];

/// Pipeline priority; runs after converters that produce Services and CA bundles
pub const PRIORITY: u32 = 600;
