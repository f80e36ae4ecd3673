//! TLD Engine - Public Suffix List rule compiler and domain extraction engine for Rust
//!
//! This library splits hostnames into their domain-level parts using rules
//! from the [Public Suffix List](https://publicsuffix.org/):
//! - Rule compilation into exception, wildcard and normal suffix collections
//! - Punycode expansion of internationalized rules
//! - Exception > wildcard > longest normal suffix precedence
//! - Frozen export for reloading a compiled list without re-expansion
//!
//! # Example
//!
//! ```rust
//! use tld_engine_r::{Extractor, ExtractorOptions};
//!
//! let list = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! co.uk
//! *.ck
//! !www.ck
//! ";
//!
//! let extractor = Extractor::new(list, ExtractorOptions::default()).unwrap();
//!
//! let parts = extractor.parse("www.example.co.uk").unwrap();
//! assert_eq!(parts.root_domain.as_deref(), Some("example.co.uk"));
//! assert_eq!(parts.top_level_domain.as_deref(), Some("co.uk"));
//! assert_eq!(parts.second_level_domain.as_deref(), Some("example"));
//! assert_eq!(parts.sub_domain.as_deref(), Some("www"));
//!
//! // Exceptions override their sibling wildcard
//! let parts = extractor.parse("www.ck").unwrap();
//! assert_eq!(parts.root_domain.as_deref(), Some("www.ck"));
//! ```
//!
//! # List Syntax
//!
//! | Line | Example | Meaning |
//! |------|---------|---------|
//! | Comment | `// ICANN` | Ignored (raw lists only) |
//! | Normal | `co.uk` | Literal public suffix |
//! | Wildcard | `*.ck` | Any single label under `ck` is a suffix |
//! | Exception | `!www.ck` | `www.ck` is registrable despite `*.ck` |
//!
//! ## Resolution
//!
//! 1. Exception rules, first match in list order
//! 2. Wildcard rules, first match in list order
//! 3. Longest listed normal suffix (hosts need at least two labels)

pub mod compile;
pub mod encode;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use compile::{compile, compile_text, RuleSet};
pub use encode::{IdnaEncoder, LabelEncoder, NilEncoder};
pub use error::{Result, SourceErrorKind, TldError};
pub use extractor::{Extractor, ExtractorOptions};
pub use matcher::{NormalMatcher, SpecialMatcher, SuffixMatcher};
pub use parser::ListMode;
pub use types::{DomainParts, HostLabels, Label, Rule, RuleKind};
