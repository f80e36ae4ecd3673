use std::collections::HashSet;

use tracing::{debug, trace};

use crate::encode::LabelEncoder;
use crate::error::{Result, SourceErrorKind, TldError};
use crate::matcher::{NormalMatcher, SpecialMatcher, SuffixMatcher};
use crate::parser::{classify, rule_lines, ListMode};
use crate::types::{DomainParts, HostLabels, Rule, RuleKind};

/// Compiled public suffix rules.
///
/// Immutable once built; share it by reference or `Arc` across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    exceptions: Vec<Rule>,
    wildcards: Vec<Rule>,
    normals: HashSet<String>,
}

impl RuleSet {
    fn add_line(&mut self, line: &str) {
        match classify(line) {
            RuleKind::Wildcard => self.wildcards.push(Rule::new(line, RuleKind::Wildcard)),
            RuleKind::Exception => self.exceptions.push(Rule::new(line, RuleKind::Exception)),
            RuleKind::Normal => {
                self.normals.insert(line.to_lowercase());
            }
        }
    }

    /// Exception rules in source order
    pub fn exceptions(&self) -> &[Rule] {
        &self.exceptions
    }

    /// Wildcard rules in source order
    pub fn wildcards(&self) -> &[Rule] {
        &self.wildcards
    }

    /// Distinct normal suffixes
    pub fn normals(&self) -> &HashSet<String> {
        &self.normals
    }

    /// Check if `suffix` is listed as a normal suffix
    pub fn contains_suffix(&self, suffix: &str) -> bool {
        self.normals.contains(&suffix.to_lowercase())
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.exceptions.len() + self.wildcards.len() + self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decompose `host`, trying exception and wildcard rules before normal suffixes.
    pub fn parse(&self, host: &str) -> Option<DomainParts> {
        let host = HostLabels::from_host(host);
        self.special_matcher()
            .resolve(&host)
            .or_else(|| self.normal_matcher().resolve(&host))
    }

    /// Decompose `host` using exception and wildcard rules only
    pub fn resolve_special(&self, host: &str) -> Option<DomainParts> {
        self.special_matcher().resolve(&HostLabels::from_host(host))
    }

    /// Decompose `host` using normal suffixes only
    pub fn resolve_normal(&self, host: &str) -> Option<DomainParts> {
        self.normal_matcher().resolve(&HostLabels::from_host(host))
    }

    fn special_matcher(&self) -> SpecialMatcher<'_> {
        SpecialMatcher::new(&self.exceptions, &self.wildcards)
    }

    fn normal_matcher(&self) -> NormalMatcher<'_> {
        NormalMatcher::new(&self.normals)
    }

    /// Export the rule set as a frozen list.
    ///
    /// Exceptions and wildcards keep their order; normals are sorted so the
    /// output is stable. Compiling the result with [`ListMode::Frozen`]
    /// yields an equal rule set.
    pub fn to_frozen_text(&self) -> String {
        let mut normals: Vec<&str> = self.normals.iter().map(String::as_str).collect();
        normals.sort_unstable();

        let mut out = String::new();
        for line in self
            .exceptions
            .iter()
            .chain(&self.wildcards)
            .map(|rule| rule.raw.as_str())
            .chain(normals)
        {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Compile a suffix list.
///
/// `input` is `None` when the source could not be read at all. Fails with
/// [`TldError::InvalidSource`] if the input is missing, not UTF-8, or empty.
pub fn compile(
    input: Option<&[u8]>,
    mode: ListMode,
    encoder: &dyn LabelEncoder,
) -> Result<RuleSet> {
    let bytes = input.ok_or_else(|| {
        TldError::invalid_source(SourceErrorKind::Missing, "no suffix list supplied")
    })?;
    let text = std::str::from_utf8(bytes)
        .map_err(|e| TldError::invalid_source(SourceErrorKind::Undecodable, e.to_string()))?;
    compile_text(text, mode, encoder)
}

/// Compile a suffix list that is already decoded
pub fn compile_text(text: &str, mode: ListMode, encoder: &dyn LabelEncoder) -> Result<RuleSet> {
    if text.is_empty() {
        return Err(TldError::invalid_source(
            SourceErrorKind::Empty,
            "suffix list is empty",
        ));
    }

    let mut rule_set = RuleSet::default();
    let mut lines = 0usize;
    let mut expanded = 0usize;

    for line in rule_lines(text, mode) {
        lines += 1;
        rule_set.add_line(line);

        if mode == ListMode::Raw {
            if let Some(encoded) = encoder.encode(line).filter(|e| e != line) {
                trace!(line, encoded = %encoded, "adding encoded rule variant");
                rule_set.add_line(&encoded);
                expanded += 1;
            }
        }
    }

    debug!(
        ?mode,
        lines,
        expanded,
        exceptions = rule_set.exceptions.len(),
        wildcards = rule_set.wildcards.len(),
        normals = rule_set.normals.len(),
        "compiled suffix list"
    );

    Ok(rule_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{IdnaEncoder, NilEncoder};

    const LIST: &str = r#"
// ===BEGIN ICANN DOMAINS===
com
co.uk
uk

// ck : https://en.wikipedia.org/wiki/.ck
*.ck
!www.ck

// jp
jp
co.jp
*.kawasaki.jp
!city.kawasaki.jp
公司.cn
cn
"#;

    fn raw(text: &str) -> RuleSet {
        compile_text(text, ListMode::Raw, &IdnaEncoder).unwrap()
    }

    #[test]
    fn test_compile_classifies_rules() {
        let rules = raw(LIST);
        assert_eq!(rules.exceptions().len(), 2);
        assert_eq!(rules.wildcards().len(), 2);
        assert_eq!(rules.exceptions()[0].raw, "!www.ck");
        assert_eq!(rules.wildcards()[1].raw, "*.kawasaki.jp");
        assert!(rules.contains_suffix("co.uk"));
        assert!(rules.contains_suffix("CO.JP"));
        assert!(!rules.contains_suffix("*.ck"));
        assert!(!rules.contains_suffix("!www.ck"));
    }

    #[test]
    fn test_compile_expands_idna() {
        let rules = raw(LIST);
        assert!(rules.contains_suffix("公司.cn"));
        assert!(rules.contains_suffix("xn--55qx5d.cn"));
        // com, co.uk, uk, jp, co.jp, cn, 公司.cn, xn--55qx5d.cn
        assert_eq!(rules.normals().len(), 8);
    }

    #[test]
    fn test_compile_dedupes_normals() {
        let rules = raw("com\ncom\nCOM\n");
        assert_eq!(rules.normals().len(), 1);
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_compile_keeps_duplicate_special_rules_in_order() {
        let rules = raw("*.ck\n!www.ck\n*.ck\n");
        assert_eq!(rules.wildcards().len(), 2);
        assert_eq!(rules.exceptions().len(), 1);
    }

    #[test]
    fn test_compile_rejects_missing_input() {
        let err = compile(None, ListMode::Raw, &NilEncoder).unwrap_err();
        assert!(matches!(
            err,
            TldError::InvalidSource {
                kind: SourceErrorKind::Missing,
                ..
            }
        ));
    }

    #[test]
    fn test_compile_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'c', b'o', b'm', b'\n', 0xff, 0xfe];
        let err = compile(Some(bytes), ListMode::Raw, &NilEncoder).unwrap_err();
        assert!(matches!(
            err,
            TldError::InvalidSource {
                kind: SourceErrorKind::Undecodable,
                ..
            }
        ));
    }

    #[test]
    fn test_compile_rejects_empty_input() {
        let err = compile(Some(&b""[..]), ListMode::Raw, &NilEncoder).unwrap_err();
        assert!(matches!(
            err,
            TldError::InvalidSource {
                kind: SourceErrorKind::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_compile_comment_only_input_is_valid() {
        let rules = raw("// nothing here\n\n");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_frozen_mode_does_not_expand() {
        let rules = compile_text("公司.cn\n", ListMode::Frozen, &IdnaEncoder).unwrap();
        assert_eq!(rules.normals().len(), 1);
        assert!(!rules.contains_suffix("xn--55qx5d.cn"));
    }

    #[test]
    fn test_frozen_roundtrip_is_idempotent() {
        let rules = raw(LIST);
        let frozen = rules.to_frozen_text();
        let reloaded = compile_text(&frozen, ListMode::Frozen, &IdnaEncoder).unwrap();
        assert_eq!(reloaded, rules);
        assert_eq!(reloaded.to_frozen_text(), frozen);
    }

    #[test]
    fn test_encoder_result_equal_to_line_is_ignored() {
        let echo = |line: &str| Some(line.to_string());
        let rules = compile_text("*.ck\n!www.ck\n", ListMode::Raw, &echo).unwrap();
        assert_eq!(rules.wildcards().len(), 1);
        assert_eq!(rules.exceptions().len(), 1);
    }

    #[test]
    fn test_parse_prefers_special_rules() {
        let rules = raw(LIST);

        let parts = rules.parse("www.ck").unwrap();
        assert_eq!(parts.top_level_domain.as_deref(), Some("ck"));
        assert_eq!(parts.root_domain.as_deref(), Some("www.ck"));

        let parts = rules.parse("foo.ck").unwrap();
        assert_eq!(parts.top_level_domain.as_deref(), Some("foo.ck"));
        assert!(parts.root_domain.is_none());

        assert!(rules.resolve_special("example.com").is_none());
        assert!(rules.resolve_normal("example.com").is_some());
    }

    #[test]
    fn test_unicode_exception_expands_to_ascii_exception() {
        let rules = raw("*.cn\n!公司.cn\n");
        assert_eq!(rules.exceptions().len(), 2);
        assert_eq!(rules.exceptions()[1].raw, "!xn--55qx5d.cn");
        assert!(rules.normals().is_empty());

        let unicode = rules.parse("www.公司.cn").unwrap();
        assert_eq!(unicode.root_domain.as_deref(), Some("公司.cn"));

        let ascii = rules.parse("www.xn--55qx5d.cn").unwrap();
        assert_eq!(ascii.top_level_domain.as_deref(), Some("cn"));
        assert_eq!(ascii.root_domain.as_deref(), Some("xn--55qx5d.cn"));
        assert_eq!(ascii.sub_domain.as_deref(), Some("www"));
    }
}
