mod normal;
mod special;

pub use normal::NormalMatcher;
pub use special::SpecialMatcher;

use crate::types::{DomainParts, HostLabels};

/// Trait for suffix resolvers
pub trait SuffixMatcher {
    /// Decompose the host, or return `None` if no rule applies
    fn resolve(&self, host: &HostLabels) -> Option<DomainParts>;
}
