//! Shared metadata and port reference types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers absent keys; templated manifests often
/// render `labels:` or `ports:` with nothing under them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The subset of Kubernetes object metadata the resolver needs
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ObjectMeta {
    /// Original resource name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Namespace, if the manifest declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Resource labels
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub labels: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Metadata with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A port given either by number or by name (Kubernetes `IntOrString`)
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PortRef {
    /// Literal port number
    Number(u16),
    /// Port name, resolved against a Service's declared ports
    Name(String),
}

impl PortRef {
    /// The literal port number, if this reference is numeric.
    ///
    /// Strings made only of digits (`"9100"`) count as numeric.
    pub fn number(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Name(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse().ok()
            }
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<u16> for PortRef {
    fn from(n: u16) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PortRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}
