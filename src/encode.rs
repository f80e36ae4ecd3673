//! ASCII-compatible encoding of suffix list lines.
//!
//! Raw suffix lists carry internationalized rules in Unicode form (`公司.cn`),
//! while hosts taken from URLs usually arrive in Punycode (`xn--55qx5d.cn`).
//! The compiler asks a [`LabelEncoder`] for the ASCII form of every raw line
//! so that both spellings end up in the rule set.

/// ACE prefix for Punycode labels
pub const ACE_PREFIX: &str = "xn--";

/// Transforms a suffix list line into its ASCII-compatible form.
pub trait LabelEncoder: Send + Sync {
    /// Return the encoded line, or `None` if it needs no transformation
    /// or cannot be transformed.
    fn encode(&self, line: &str) -> Option<String>;
}

/// Encodes each non-ASCII label with Punycode and the `xn--` prefix.
/// ASCII labels and `*` pass through unchanged; a leading `!` exception
/// marker stays in front of the encoded line.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaEncoder;

impl LabelEncoder for IdnaEncoder {
    fn encode(&self, line: &str) -> Option<String> {
        if line.is_ascii() {
            return None;
        }

        let (marker, body) = match line.strip_prefix('!') {
            Some(body) => ("!", body),
            None => ("", line),
        };

        let mut labels = Vec::new();
        for label in body.split('.') {
            if label.is_ascii() {
                labels.push(label.to_string());
            } else {
                let encoded = idna::punycode::encode_str(label)?;
                labels.push(format!("{ACE_PREFIX}{encoded}"));
            }
        }
        Some(format!("{marker}{}", labels.join(".")))
    }
}

/// Encoder that never transforms anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NilEncoder;

impl LabelEncoder for NilEncoder {
    fn encode(&self, _line: &str) -> Option<String> {
        None
    }
}

impl<F> LabelEncoder for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn encode(&self, line: &str) -> Option<String> {
        self(line)
    }
}
