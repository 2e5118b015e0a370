//! Reserved-word table
//!
//! The language is still growing, so the keyword list is a single
//! injectable value instead of string comparisons scattered through the
//! scanner. Extending the language means extending this set.

use std::collections::HashSet;

/// Keywords of the current language revision: the primitive type names
/// plus the statement keywords.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // Primitive types
    "bool", "char", "float", "int", "str", "void",
    // Statements
    "def", "if", "print", "return", "set", "var",
    // Boolean literals
    "false", "true",
];

/// An explicit, enumerated set of reserved words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// An empty set: every identifier lexes as `Identifier`
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Reserves an additional word. Returns `true` if it was new.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

impl Default for KeywordSet {
    /// The built-in reserved words of the current language revision
    fn default() -> Self {
        DEFAULT_KEYWORDS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_has_types_and_statements() {
        let set = KeywordSet::default();
        for word in ["bool", "int", "char", "var", "def", "if", "return", "print", "set"] {
            assert!(set.contains(word), "missing keyword: {}", word);
        }
        assert!(!set.contains("calcular"));
    }

    #[test]
    fn test_extension_without_scanner_changes() {
        let mut set = KeywordSet::default();
        assert!(!set.contains("while"));
        assert!(set.insert("while"));
        assert!(set.contains("while"));
        assert!(!set.insert("while"));
    }

    #[test]
    fn test_from_iterator() {
        let set: KeywordSet = ["alpha", "beta"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("alpha"));
        assert!(!set.contains("int"));
    }
}
