use std::collections::HashSet;

use super::SuffixMatcher;
use crate::types::{DomainParts, HostLabels};

/// Resolves hosts against the literal suffix set.
///
/// Walks from the full host towards the top label, one lookup per level,
/// and stops at the first (longest) listed suffix.
#[derive(Debug, Clone, Copy)]
pub struct NormalMatcher<'a> {
    normals: &'a HashSet<String>,
}

impl<'a> NormalMatcher<'a> {
    pub fn new(normals: &'a HashSet<String>) -> Self {
        Self { normals }
    }

    /// Number of trailing labels covered by the longest listed suffix
    pub fn suffix_len(&self, host: &HostLabels) -> Option<usize> {
        let labels = host.labels();
        (0..labels.len())
            .find(|&start| self.normals.contains(&labels[start..].join(".")))
            .map(|start| labels.len() - start)
    }
}

impl SuffixMatcher for NormalMatcher<'_> {
    fn resolve(&self, host: &HostLabels) -> Option<DomainParts> {
        // A single label is a TLD at best
        if host.len() < 2 {
            return None;
        }

        let suffix_len = self.suffix_len(host)?;

        // A listed suffix with nothing in front has no parts to report.
        if suffix_len == host.len() {
            return Some(DomainParts::default());
        }

        Some(DomainParts::decompose(host, suffix_len))
    }
}
