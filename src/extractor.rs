//! Extractor module.
//!
//! Owns a compiled [`RuleSet`] and exposes host and URL decomposition on top of it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use url::{Host, Url};

use crate::compile::{compile, RuleSet};
use crate::encode::{IdnaEncoder, LabelEncoder};
use crate::error::{Result, TldError};
use crate::parser::ListMode;
use crate::types::DomainParts;

/// URL schemes whose hosts are parsed as domains
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

/// Extractor builder options.
#[derive(Clone)]
pub struct ExtractorOptions {
    /// How the suffix list source is read
    pub mode: ListMode,
    /// Encoder used to expand raw lines into their ASCII form
    pub encoder: Arc<dyn LabelEncoder>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            mode: ListMode::Raw,
            encoder: Arc::new(IdnaEncoder),
        }
    }
}

impl ExtractorOptions {
    /// Create new extractor options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set list mode.
    pub fn with_mode(mut self, mode: ListMode) -> Self {
        self.mode = mode;
        self
    }

    /// Read the source as a frozen export.
    pub fn frozen(self) -> Self {
        self.with_mode(ListMode::Frozen)
    }

    /// Set label encoder.
    pub fn with_encoder(mut self, encoder: Arc<dyn LabelEncoder>) -> Self {
        self.encoder = encoder;
        self
    }
}

/// Splits hostnames into registrable domain, suffix and subdomain parts.
///
/// Cloning is cheap; clones share the same rule set.
#[derive(Debug, Clone)]
pub struct Extractor {
    rule_set: Arc<RuleSet>,
}

impl Extractor {
    /// Create a new extractor from suffix list text.
    pub fn new(text: &str, options: ExtractorOptions) -> Result<Self> {
        Self::from_bytes(text.as_bytes(), options)
    }

    /// Create a new extractor from raw suffix list bytes.
    pub fn from_bytes(bytes: &[u8], options: ExtractorOptions) -> Result<Self> {
        let rule_set = compile(Some(bytes), options.mode, options.encoder.as_ref())?;
        Ok(Self::from_rule_set(Arc::new(rule_set)))
    }

    /// Create a new extractor from a suffix list file.
    pub fn from_file(path: impl AsRef<Path>, options: ExtractorOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded suffix list");
        Self::from_bytes(&bytes, options)
    }

    /// Create an extractor sharing an already compiled rule set.
    pub fn from_rule_set(rule_set: Arc<RuleSet>) -> Self {
        Self { rule_set }
    }

    /// Decompose a hostname.
    pub fn parse(&self, host: &str) -> Option<DomainParts> {
        self.rule_set.parse(host)
    }

    /// Decompose the host of a URL.
    ///
    /// Only special schemes (`http`, `https`, `ws`, `wss`, `ftp`, `file`) are
    /// accepted: their hosts come back from the URL parser in ASCII form,
    /// which the raw-mode encoding pass accounts for. Other schemes carry
    /// opaque, percent-encoded hosts and are rejected.
    pub fn parse_url(&self, url: &str) -> Result<Option<DomainParts>> {
        let parsed = Url::parse(url).map_err(|e| TldError::InvalidUrl(format!("{url}: {e}")))?;

        if !SPECIAL_SCHEMES.contains(&parsed.scheme()) {
            return Err(TldError::InvalidUrl(format!(
                "{url}: scheme '{}' has an opaque host",
                parsed.scheme()
            )));
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => Ok(self.parse(domain)),
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Err(TldError::InvalidUrl(format!(
                "{url}: IP addresses have no registrable domain"
            ))),
            None => Err(TldError::InvalidUrl(format!("{url}: missing host"))),
        }
    }

    /// The compiled rule set
    pub fn rule_set(&self) -> &Arc<RuleSet> {
        &self.rule_set
    }

    /// Export the rule set as a frozen list.
    pub fn export_frozen(&self) -> String {
        self.rule_set.to_frozen_text()
    }
}
