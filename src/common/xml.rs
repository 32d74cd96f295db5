//! XML text escaping for generated parts.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::escape_xml;
/// assert_eq!(escape_xml("생산 · 저장 & 운송"), "생산 · 저장 &amp; 운송");
/// assert_eq!(escape_xml("<5% \"순도\""), "&lt;5% &quot;순도&quot;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&apos;f");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_xml("수소 에너지"), "수소 에너지");
    }
}
