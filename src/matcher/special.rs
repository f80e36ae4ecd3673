use super::SuffixMatcher;
use crate::types::{DomainParts, HostLabels, Rule};

/// Resolves hosts against exception and wildcard rules.
///
/// Both lists are scanned in source order and the first matching rule wins;
/// exceptions are always consulted before wildcards.
#[derive(Debug, Clone, Copy)]
pub struct SpecialMatcher<'a> {
    exceptions: &'a [Rule],
    wildcards: &'a [Rule],
}

impl<'a> SpecialMatcher<'a> {
    pub fn new(exceptions: &'a [Rule], wildcards: &'a [Rule]) -> Self {
        Self {
            exceptions,
            wildcards,
        }
    }

    /// Find the rule that applies to `host`
    pub fn find_rule(&self, host: &HostLabels) -> Option<&'a Rule> {
        self.exceptions
            .iter()
            .find(|rule| rule.matches(host))
            .or_else(|| self.wildcards.iter().find(|rule| rule.matches(host)))
    }
}

impl SuffixMatcher for SpecialMatcher<'_> {
    fn resolve(&self, host: &HostLabels) -> Option<DomainParts> {
        // The suffix is taken from the host labels, so a wildcard is
        // reported with the label it matched rather than `*`.
        let rule = self.find_rule(host)?;
        Some(DomainParts::decompose(host, rule.suffix_len()))
    }
}
