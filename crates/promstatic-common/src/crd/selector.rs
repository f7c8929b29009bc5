//! Label selectors as used by `ServiceMonitor.spec.selector`
//!
//! Unlike Kubernetes, an empty selector here matches nothing. A monitor that
//! forgot its selector must not silently scrape every Service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::null_as_default;

/// Operator for label selector requirements
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum LabelSelectorOperator {
    /// Label value must be in the specified set
    In,
    /// Label value must not be in the specified set
    NotIn,
    /// Label must exist (value ignored)
    Exists,
    /// Label must not exist (value ignored)
    DoesNotExist,
}

impl LabelSelectorOperator {
    /// Check if a label value satisfies this operator against `values`
    pub fn matches(&self, label_value: Option<&str>, values: &[String]) -> bool {
        match self {
            Self::In => label_value.is_some_and(|v| values.iter().any(|req| req == v)),
            Self::NotIn => label_value.is_none_or(|v| !values.iter().any(|req| req == v)),
            Self::Exists => label_value.is_some(),
            Self::DoesNotExist => label_value.is_none(),
        }
    }
}

/// A single `matchExpressions` entry
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LabelSelectorRequirement {
    /// The label key that the selector applies to
    pub key: String,

    /// Relationship between the label and `values`
    pub operator: LabelSelectorOperator,

    /// Values for `In` / `NotIn`; empty for `Exists` / `DoesNotExist`
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

impl LabelSelectorRequirement {
    /// Check if a label set satisfies this requirement
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        let value = labels.get(&self.key).map(|s| s.as_str());
        self.operator.matches(value, &self.values)
    }
}

/// `matchLabels` plus `matchExpressions`; every entry must hold
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    /// Exact key/value pairs
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub match_labels: BTreeMap<String, String>,

    /// Set-based requirements
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

impl LabelSelector {
    /// Selector from `matchLabels` pairs only
    pub fn from_labels<K, V>(labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            match_labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            match_expressions: Vec::new(),
        }
    }

    /// True when the selector has no entries at all
    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty() && self.match_expressions.is_empty()
    }

    /// Check whether a label set satisfies this selector.
    ///
    /// Extra labels on the target are irrelevant. Empty selectors never match.
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        if self.is_empty() {
            return false;
        }

        self.match_labels
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value))
            && self.match_expressions.iter().all(|req| req.matches(labels))
    }
}
