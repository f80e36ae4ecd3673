use serde::{Deserialize, Serialize};

/// Suffix rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `!www.ck` - carves one label out of a wildcard suffix
    Exception,
    /// `*.ck` - one label position matches any single label
    Wildcard,
    /// `co.uk` - literal suffix
    Normal,
}

/// A single label of a compiled rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Literal lowercase label
    Literal(String),
    /// `*` - matches exactly one host label
    Wildcard,
}

impl Label {
    fn parse(label: &str) -> Self {
        if label == "*" {
            Label::Wildcard
        } else {
            Label::Literal(label.to_lowercase())
        }
    }

    /// Check if this label accepts the given (lowercase) host label
    pub fn matches(&self, host_label: &str) -> bool {
        match self {
            Label::Literal(s) => s == host_label,
            Label::Wildcard => true,
        }
    }
}

/// A compiled exception or wildcard rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Line as it appeared in the source list
    pub raw: String,
    /// Rule kind
    pub kind: RuleKind,
    /// Labels, leftmost first; the top label is last
    pub labels: Vec<Label>,
}

impl Rule {
    /// Compile a rule line. The `!` marker is stripped from exceptions.
    pub fn new(raw: &str, kind: RuleKind) -> Self {
        let body = match kind {
            RuleKind::Exception => raw.strip_prefix('!').unwrap_or(raw),
            RuleKind::Wildcard | RuleKind::Normal => raw,
        };

        Self {
            raw: raw.to_string(),
            kind,
            labels: body.split('.').map(Label::parse).collect(),
        }
    }

    /// Check if the rule covers the trailing labels of `host`, one label per position.
    pub fn matches(&self, host: &HostLabels) -> bool {
        let labels = host.labels();
        if labels.len() < self.labels.len() {
            return false;
        }

        let tail = &labels[labels.len() - self.labels.len()..];
        self.labels
            .iter()
            .zip(tail)
            .all(|(rule_label, host_label)| rule_label.matches(host_label))
    }

    /// Number of trailing host labels that form the public suffix when this rule matches.
    pub fn suffix_len(&self) -> usize {
        match self.kind {
            RuleKind::Exception => self.labels.len() - 1,
            RuleKind::Wildcard | RuleKind::Normal => self.labels.len(),
        }
    }
}

/// Lowercased hostname split into labels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostLabels {
    labels: Vec<String>,
}

impl HostLabels {
    /// Lowercase `host` and split it on `.`
    pub fn from_host(host: &str) -> Self {
        Self {
            labels: host.to_lowercase().split('.').map(String::from).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Hostname decomposition.
///
/// Every field is independently optional and serializes as `null` when
/// absent. Hosts are not validated, so empty labels (`.com`) come back as
/// present empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainParts {
    /// Registrable domain: the public suffix plus one label
    pub root_domain: Option<String>,
    /// Matched public suffix
    pub top_level_domain: Option<String>,
    /// Label immediately left of the suffix
    pub second_level_domain: Option<String>,
    /// Everything left of the second-level label
    pub sub_domain: Option<String>,
}

impl DomainParts {
    /// Split `host` so that its trailing `suffix_len` labels form the public suffix.
    pub(crate) fn decompose(host: &HostLabels, suffix_len: usize) -> Self {
        let labels = host.labels();
        let suffix_len = suffix_len.min(labels.len());
        let suffix_start = labels.len() - suffix_len;

        let top_level_domain = if suffix_len > 0 {
            Some(labels[suffix_start..].join("."))
        } else {
            None
        };

        if suffix_start == 0 {
            return Self {
                top_level_domain,
                ..Self::default()
            };
        }

        let second_start = suffix_start - 1;
        let sub_domain = if second_start > 0 {
            Some(labels[..second_start].join("."))
        } else {
            None
        };

        Self {
            root_domain: Some(labels[second_start..].join(".")),
            top_level_domain,
            second_level_domain: Some(labels[second_start].clone()),
            sub_domain,
        }
    }

    /// True if every field is absent
    pub fn is_empty(&self) -> bool {
        self.root_domain.is_none()
            && self.top_level_domain.is_none()
            && self.second_level_domain.is_none()
            && self.sub_domain.is_none()
    }

    /// Rejoin the present sub, second-level and top-level parts.
    pub fn host(&self) -> String {
        [
            self.sub_domain.as_deref(),
            self.second_level_domain.as_deref(),
            self.top_level_domain.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(".")
    }
}
