pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;
}

/// Word separators: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F, the same set Python's `str.split()` uses.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Non-empty words of `text`, original casing kept
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Splits on separators and lowercases each piece.
/// Punctuation stays attached to the word it touches.
#[derive(Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text).map(str::to_lowercase).collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

/// Turn a query keyword into the form stored in the inverted index.
///
/// Returns `None` when the input is blank or holds more than one
/// word, since neither can equal a single token.
pub fn normalize_keyword(keyword: &str) -> Option<String> {
    let trimmed = keyword.trim_matches(is_separator);
    if trimmed.is_empty() || trimmed.contains(is_separator) {
        return None;
    }
    Some(trimmed.to_lowercase())
}
