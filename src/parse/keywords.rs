//! Text tokenization and keyword derivation.
//!
//! Keyword analysis works over the text-stripped document: script and style
//! blocks are removed first, then all tags, leaving visible text. Tokens are
//! lowercased words split on word boundaries.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MIN_KEYWORD_WORD_LENGTH;

static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    crate::parse::compile_regex_unsafe(r"(?is)<script[^>]*>.*?</script>", "SCRIPT_BLOCK_RE")
});

static STYLE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    crate::parse::compile_regex_unsafe(r"(?is)<style[^>]*>.*?</style>", "STYLE_BLOCK_RE")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(r"<[^>]*>", "TAG_RE"));

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(r"[\w']+", "WORD_RE"));

/// Strips script blocks, style blocks, and all tags from raw HTML, leaving
/// the visible text with tags replaced by spaces.
pub fn strip_tags(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(html, " ");
    let without_styles = STYLE_BLOCK_RE.replace_all(&without_scripts, " ");
    TAG_RE.replace_all(&without_styles, " ").into_owned()
}

/// Splits text into lowercase word tokens on word boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|word| word.as_str().to_lowercase())
        .collect()
}

/// Derives up to `limit` keywords by frequency from words longer than three
/// characters. Ties break alphabetically so derivation is deterministic.
pub fn derive_keywords(words: &[String], limit: usize) -> Vec<String> {
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for word in words {
        if word.chars().count() >= MIN_KEYWORD_WORD_LENGTH {
            *frequencies.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Counts occurrences of a keyword (or multi-word phrase) in a token stream.
///
/// The keyword is tokenized the same way as the document, then matched as a
/// consecutive token sequence, so "web audit" matches the word pair without
/// matching "webaudit" substrings.
pub fn phrase_occurrences(words: &[String], keyword: &str) -> usize {
    let phrase = tokenize(keyword);
    if phrase.is_empty() || phrase.len() > words.len() {
        return 0;
    }
    words
        .windows(phrase.len())
        .filter(|window| window.iter().zip(&phrase).all(|(a, b)| a == b))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_removes_scripts_and_markup() {
        let html = "<html><head><script>var x = 'hidden';</script>\
                    <style>body { color: red; }</style></head>\
                    <body><p>Visible text</p></body></html>";
        let text = strip_tags(html);
        assert!(text.contains("Visible text"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("The Quick, brown FOX!"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_derive_keywords_by_frequency() {
        let words = tokenize("rust rust rust audit audit page the the the the");
        let keywords = derive_keywords(&words, 5);
        // "the" is too short to qualify; "rust" outranks "audit".
        assert_eq!(keywords, vec!["rust", "audit", "page"]);
    }

    #[test]
    fn test_derive_keywords_breaks_ties_deterministically() {
        let words = tokenize("alpha beta alpha beta gamma");
        let keywords = derive_keywords(&words, 2);
        assert_eq!(keywords, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_phrase_occurrences_single_word() {
        let words = tokenize("rust is fast and rust is safe");
        assert_eq!(phrase_occurrences(&words, "rust"), 2);
        assert_eq!(phrase_occurrences(&words, "go"), 0);
    }

    #[test]
    fn test_phrase_occurrences_multi_word() {
        let words = tokenize("web audit tools make web audit easy");
        assert_eq!(phrase_occurrences(&words, "web audit"), 2);
    }

    #[test]
    fn test_phrase_occurrences_empty_inputs() {
        assert_eq!(phrase_occurrences(&[], "rust"), 0);
        let words = tokenize("rust");
        assert_eq!(phrase_occurrences(&words, ""), 0);
    }
}
