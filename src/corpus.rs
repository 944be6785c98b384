use crate::error::{CorpusError, Result};
use crate::language::ScriptDetector;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Whether a fragment gets `\b` anchors when compiled into a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Wrapped as `\b(?:…)\b`; for scripts with whitespace word breaks.
    Anchored,
    /// Matched as a contiguous substring; for CJK/kana/Hangul/Thai
    /// fragments and manual entries tagged with the `,0` suffix.
    Contiguous,
}

/// One term or term family in one language, in the `regex` crate dialect.
#[derive(Debug, Clone)]
pub struct Fragment {
    pattern: String,
    boundary: BoundaryPolicy,
}

impl Fragment {
    /// Build a fragment, deriving the boundary policy from its script
    /// content.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let boundary = if ScriptDetector::needs_word_boundaries(&pattern) {
            BoundaryPolicy::Anchored
        } else {
            BoundaryPolicy::Contiguous
        };
        Fragment { pattern, boundary }
    }

    /// Build a fragment with anchoring explicitly disabled.
    pub fn contiguous(pattern: impl Into<String>) -> Self {
        Fragment {
            pattern: pattern.into(),
            boundary: BoundaryPolicy::Contiguous,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// The fragment as one alternation branch of a union pattern.
    pub fn as_branch(&self) -> String {
        match self.boundary {
            BoundaryPolicy::Anchored => format!(r"\b(?:{})\b", self.pattern),
            BoundaryPolicy::Contiguous => format!("(?:{})", self.pattern),
        }
    }
}

/// Opaque handle naming one evidence category in the corpus.
///
/// The name doubles as a component of the compiler cache key, which is
/// why `KeywordCorpus::token` restricts it to `[A-Za-z0-9_]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

struct Category {
    fragments: Vec<Fragment>,
    frozen: bool,
}

/// Registry of category tokens to ordered fragment lists.
///
/// Assembled once at process warm-up; each category becomes immutable the
/// first time a matcher is compiled from it. Registration to a frozen
/// category is rejected so that already-cached matchers can never go
/// silently stale.
#[derive(Default)]
pub struct KeywordCorpus {
    categories: Mutex<HashMap<String, Category>>,
}

impl KeywordCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Category>> {
        // A poisoned lock only means another thread panicked mid-read;
        // the map itself is still structurally sound.
        self.categories
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create (or fetch) the token for a category name.
    pub fn token(&self, name: &str) -> Result<Token> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CorpusError::InvalidTokenName(name.to_string()));
        }
        self.lock().entry(name.to_string()).or_insert(Category {
            fragments: Vec::new(),
            frozen: false,
        });
        Ok(Token(name.to_string()))
    }

    /// Append fragments to a category, preserving order. Duplicates
    /// across calls are allowed; registration after the category has been
    /// compiled is not.
    pub fn register(&self, token: &Token, fragments: Vec<Fragment>) -> Result<()> {
        let mut categories = self.lock();
        let category = categories
            .get_mut(token.name())
            .ok_or_else(|| CorpusError::UnknownCategory(token.name().to_string()))?;
        if category.frozen {
            return Err(CorpusError::FrozenCategory(token.name().to_string()));
        }
        category.fragments.extend(fragments);
        Ok(())
    }

    /// Convenience for the builtin tables: register plain pattern strings
    /// with script-derived boundary policies.
    pub fn register_terms(&self, token: &Token, patterns: &[&str]) -> Result<()> {
        self.register(token, patterns.iter().map(|p| Fragment::new(*p)).collect())
    }

    /// Concatenated fragments for the given tokens, in token order then
    /// fragment order, not deduplicated. Declaration order feeds
    /// alternation precedence downstream, so it is preserved exactly.
    pub fn fragments_for(&self, tokens: &[&Token]) -> Result<Vec<Fragment>> {
        let categories = self.lock();
        let mut fragments = Vec::new();
        for token in tokens {
            let category = categories
                .get(token.name())
                .ok_or_else(|| CorpusError::UnknownCategory(token.name().to_string()))?;
            fragments.extend(category.fragments.iter().cloned());
        }
        Ok(fragments)
    }

    /// Mark a category frozen. Idempotent: freezing an already-frozen
    /// category is a no-op.
    pub(crate) fn freeze(&self, token: &Token) -> Result<()> {
        let mut categories = self.lock();
        let category = categories
            .get_mut(token.name())
            .ok_or_else(|| CorpusError::UnknownCategory(token.name().to_string()))?;
        category.frozen = true;
        Ok(())
    }

    pub fn is_frozen(&self, token: &Token) -> bool {
        self.lock()
            .get(token.name())
            .map(|c| c.frozen)
            .unwrap_or(false)
    }

    pub fn fragment_count(&self, token: &Token) -> usize {
        self.lock()
            .get(token.name())
            .map(|c| c.fragments.len())
            .unwrap_or(0)
    }

    /// (category name, fragment count) pairs, sorted by name.
    pub fn summary(&self) -> Vec<(String, usize)> {
        let categories = self.lock();
        let mut summary: Vec<(String, usize)> = categories
            .iter()
            .map(|(name, category)| (name.clone(), category.fragments.len()))
            .collect();
        summary.sort();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_name_validation() {
        let corpus = KeywordCorpus::new();
        assert!(corpus.token("STRONG_DANCE").is_ok());
        assert!(corpus.token("easy_dance_2").is_ok());
        assert!(matches!(
            corpus.token("bad token"),
            Err(CorpusError::InvalidTokenName(_))
        ));
        assert!(matches!(
            corpus.token("bad-token"),
            Err(CorpusError::InvalidTokenName(_))
        ));
        assert!(matches!(
            corpus.token(""),
            Err(CorpusError::InvalidTokenName(_))
        ));
    }

    #[test]
    fn test_register_preserves_order_and_duplicates() {
        let corpus = KeywordCorpus::new();
        let token = corpus.token("DANCE").unwrap();
        corpus.register_terms(&token, &["breaking?", "poppers?"]).unwrap();
        corpus.register_terms(&token, &["breaking?"]).unwrap();

        let fragments = corpus.fragments_for(&[&token]).unwrap();
        let patterns: Vec<&str> = fragments.iter().map(|f| f.pattern()).collect();
        assert_eq!(patterns, vec!["breaking?", "poppers?", "breaking?"]);
    }

    #[test]
    fn test_fragments_for_follows_token_order() {
        let corpus = KeywordCorpus::new();
        let a = corpus.token("A").unwrap();
        let b = corpus.token("B").unwrap();
        corpus.register_terms(&a, &["alpha"]).unwrap();
        corpus.register_terms(&b, &["beta"]).unwrap();

        let ab: Vec<String> = corpus
            .fragments_for(&[&a, &b])
            .unwrap()
            .iter()
            .map(|f| f.pattern().to_string())
            .collect();
        let ba: Vec<String> = corpus
            .fragments_for(&[&b, &a])
            .unwrap()
            .iter()
            .map(|f| f.pattern().to_string())
            .collect();
        assert_eq!(ab, vec!["alpha", "beta"]);
        assert_eq!(ba, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_frozen_category_rejects_registration() {
        let corpus = KeywordCorpus::new();
        let token = corpus.token("DANCE").unwrap();
        corpus.register_terms(&token, &["breaking?"]).unwrap();
        corpus.freeze(&token).unwrap();

        assert!(corpus.is_frozen(&token));
        assert!(matches!(
            corpus.register_terms(&token, &["late entry"]),
            Err(CorpusError::FrozenCategory(_))
        ));
        // Freezing again is harmless.
        corpus.freeze(&token).unwrap();
    }

    #[test]
    fn test_boundary_policy_derivation() {
        assert_eq!(Fragment::new("breaking?").boundary(), BoundaryPolicy::Anchored);
        assert_eq!(Fragment::new("танцы").boundary(), BoundaryPolicy::Anchored);
        assert_eq!(Fragment::new("רוקד").boundary(), BoundaryPolicy::Anchored);
        assert_eq!(Fragment::new("街舞").boundary(), BoundaryPolicy::Contiguous);
        assert_eq!(Fragment::new("เต้น").boundary(), BoundaryPolicy::Contiguous);
        assert_eq!(
            Fragment::contiguous("forced raw").boundary(),
            BoundaryPolicy::Contiguous
        );
    }

    #[test]
    fn test_as_branch_wrapping() {
        assert_eq!(Fragment::new("dances?").as_branch(), r"\b(?:dances?)\b");
        assert_eq!(Fragment::new("舞").as_branch(), "(?:舞)");
    }
}
