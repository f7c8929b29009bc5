//! ConfigMap, tracked only so CA bundle references can be checked

use serde::{Deserialize, Serialize};

use super::types::{null_as_default, ObjectMeta};

/// Kubernetes ConfigMap (contents are opaque to the resolver)
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConfigMap {
    /// Object metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
}

impl ConfigMap {
    /// Resource name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
