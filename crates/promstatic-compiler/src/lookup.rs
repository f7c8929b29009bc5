//! Read-only lookups injected into the compiler

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Maps an original Service name to the name it has in the generated runtime.
///
/// `None` means the Service has no runtime counterpart; scrape targets are
/// never built from an unmapped original name.
pub trait AliasLookup {
    /// Runtime name for `original`, if one is registered
    fn runtime_name(&self, original: &str) -> Option<&str>;
}

impl AliasLookup for BTreeMap<String, String> {
    fn runtime_name(&self, original: &str) -> Option<&str> {
        self.get(original).map(String::as_str)
    }
}

impl<S: BuildHasher> AliasLookup for HashMap<String, String, S> {
    fn runtime_name(&self, original: &str) -> Option<&str> {
        self.get(original).map(String::as_str)
    }
}

/// Tells whether a CA bundle ConfigMap will exist in the generated output
pub trait CaBundleCatalog {
    /// True if a ConfigMap named `config_map` is available for mounting
    fn has_bundle(&self, config_map: &str) -> bool;
}

impl CaBundleCatalog for BTreeSet<String> {
    fn has_bundle(&self, config_map: &str) -> bool {
        self.contains(config_map)
    }
}

impl<S: BuildHasher> CaBundleCatalog for HashSet<String, S> {
    fn has_bundle(&self, config_map: &str) -> bool {
        self.contains(config_map)
    }
}
