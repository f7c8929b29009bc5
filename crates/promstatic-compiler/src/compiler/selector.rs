//! Selector-to-Service matching
//!
//! A ServiceMonitor is expected to target one logical Service. When several
//! match, the first in discovery order is used and the ambiguity is reported.

use promstatic_common::crd::{LabelSelector, Service};
use promstatic_common::Discovered;

/// Outcome of matching a selector against the known Services
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceMatch<'a> {
    /// Nothing matched (or the selector was empty)
    None,
    /// Exactly one Service matched
    Unique(&'a Service),
    /// Several matched; `chosen` is the first of `candidates`
    Ambiguous {
        /// The Service to use
        chosen: &'a Service,
        /// All matches in discovery order
        candidates: Vec<&'a Service>,
    },
}

impl<'a> ServiceMatch<'a> {
    /// The Service to scrape, if any
    pub fn service(&self) -> Option<&'a Service> {
        match self {
            Self::None => None,
            Self::Unique(svc) => Some(*svc),
            Self::Ambiguous { chosen, .. } => Some(*chosen),
        }
    }
}

/// Match `selector` against `services`, ordered by discovery index
pub fn select_service<'a>(
    selector: &LabelSelector,
    services: &'a [Discovered<Service>],
) -> ServiceMatch<'a> {
    let mut matches: Vec<&'a Discovered<Service>> = services
        .iter()
        .filter(|svc| selector.matches(svc.resource.selectable_labels()))
        .collect();
    matches.sort_by_key(|svc| svc.order);

    let candidates: Vec<&'a Service> = matches.into_iter().map(|svc| &svc.resource).collect();
    match candidates.len() {
        0 => ServiceMatch::None,
        1 => ServiceMatch::Unique(candidates[0]),
        _ => ServiceMatch::Ambiguous {
            chosen: candidates[0],
            candidates,
        },
    }
}
