use crate::corpus::{KeywordCorpus, Token};
use crate::error::{CorpusError, Result};
use regex::{Captures, Regex, RegexBuilder};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

/// A pattern that can never match any input. Stands in for a union with
/// zero fragments so downstream code needs no special case.
const NEVER_MATCH: &str = r"[^\s\S]";

/// Immutable compiled alternation over every fragment of one or more
/// category tokens. Case-insensitive; each fragment keeps its own
/// boundary policy.
pub struct CompiledMatcher {
    key: Vec<String>,
    regex: Regex,
}

impl CompiledMatcher {
    /// Sorted names of the tokens this matcher was compiled from.
    pub fn key(&self) -> &[String] {
        &self.key
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Distinct substrings matched by a non-overlapping leftmost-first
    /// scan of the text.
    pub fn find_matches(&self, text: &str) -> BTreeSet<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Wrap every match of this union in the given markers, in a single
    /// substitution pass.
    pub fn wrap_matches(&self, text: &str, open: &str, close: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures| {
                format!("{}{}{}", open, &caps[0], close)
            })
            .into_owned()
    }

    /// Replace every match of this union with a single space. Used for
    /// the pre-match removal pass; the space keeps neighbouring words
    /// from being spliced into a new false match.
    pub fn remove_matches(&self, text: &str) -> String {
        self.regex.replace_all(text, " ").into_owned()
    }
}

/// Builds and memoizes `CompiledMatcher`s from corpus fragments.
///
/// The cache key is the sorted token-name tuple, so `compile(A, B)` and
/// `compile(B, A)` return the identical cached matcher. Compiling a union
/// freezes each listed token against further registration. Duplicate
/// concurrent builds of the same key waste CPU but are harmless: results
/// are immutable and functionally identical, and only one wins the cache
/// slot.
pub struct PatternCompiler {
    corpus: Arc<KeywordCorpus>,
    cache: Mutex<HashMap<Vec<String>, Arc<CompiledMatcher>>>,
}

impl PatternCompiler {
    pub fn new(corpus: Arc<KeywordCorpus>) -> Self {
        PatternCompiler {
            corpus,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn corpus(&self) -> &KeywordCorpus {
        &self.corpus
    }

    pub fn compile(&self, tokens: &[&Token]) -> Result<Arc<CompiledMatcher>> {
        let mut key: Vec<String> = tokens.iter().map(|t| t.name().to_string()).collect();
        key.sort();
        key.dedup();

        if let Ok(cache) = self.cache.lock() {
            if let Some(matcher) = cache.get(&key) {
                return Ok(Arc::clone(matcher));
            }
        }

        let matcher = Arc::new(self.build(&key, tokens)?);
        for token in tokens {
            self.corpus.freeze(token)?;
        }

        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let entry = cache.entry(key).or_insert(matcher);
        Ok(Arc::clone(entry))
    }

    fn build(&self, key: &[String], tokens: &[&Token]) -> Result<CompiledMatcher> {
        // Branches keep call order (token order, then fragment order):
        // earlier alternatives win ties, matching declaration precedence.
        let mut branches = Vec::new();
        for &token in tokens {
            for fragment in self.corpus.fragments_for(&[token])? {
                let branch = fragment.as_branch();
                // Validate each fragment on its own so a malformed entry
                // is reported with its category, not as a union failure.
                if let Err(e) = Regex::new(&format!("(?i){branch}")) {
                    return Err(CorpusError::BadFragment {
                        category: token.name().to_string(),
                        fragment: fragment.pattern().to_string(),
                        source: Box::new(e),
                    });
                }
                branches.push(branch);
            }
        }

        let pattern = if branches.is_empty() {
            log::warn!("compiling empty union {key:?}: matcher will never match");
            format!("(?i){NEVER_MATCH}")
        } else {
            format!("(?i)(?:{})", branches.join("|"))
        };

        // The default compiled-program size limit (10 MiB) is exceeded by
        // the union over the full multilingual taxonomy once case-folded;
        // raise it so the intended pattern compiles. This changes no match
        // semantics, only the resource ceiling for the compiled program.
        let regex = RegexBuilder::new(&pattern)
            .size_limit(1 << 30)
            .build()
            .map_err(|e| CorpusError::BadFragment {
                category: key.join("+"),
                fragment: "(union)".to_string(),
                source: Box::new(e),
            })?;
        log::debug!("compiled union {key:?} with {} branches", branches.len());

        Ok(CompiledMatcher {
            key: key.to_vec(),
            regex,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Fragment;

    fn corpus_with(entries: &[(&str, &[&str])]) -> (Arc<KeywordCorpus>, Vec<Token>) {
        let corpus = KeywordCorpus::new();
        let mut tokens = Vec::new();
        for (name, patterns) in entries {
            let token = corpus.token(name).unwrap();
            corpus.register_terms(&token, patterns).unwrap();
            tokens.push(token);
        }
        (Arc::new(corpus), tokens)
    }

    #[test]
    fn test_compile_is_memoized_and_order_independent() {
        let (corpus, tokens) = corpus_with(&[("A", &["alpha"]), ("B", &["beta"])]);
        let compiler = PatternCompiler::new(corpus);

        let ab = compiler.compile(&[&tokens[0], &tokens[1]]).unwrap();
        let ba = compiler.compile(&[&tokens[1], &tokens[0]]).unwrap();
        assert!(Arc::ptr_eq(&ab, &ba));
        assert_eq!(ab.key(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_compile_freezes_tokens() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["breaking?"])]);
        let compiler = PatternCompiler::new(Arc::clone(&corpus));

        compiler.compile(&[&tokens[0]]).unwrap();
        assert!(corpus.is_frozen(&tokens[0]));
        assert!(corpus.register_terms(&tokens[0], &["late"]).is_err());

        // Recompiling the same set is idempotent.
        compiler.compile(&[&tokens[0]]).unwrap();
    }

    #[test]
    fn test_malformed_fragment_names_its_category() {
        let corpus = KeywordCorpus::new();
        let token = corpus.token("BROKEN").unwrap();
        corpus
            .register(&token, vec![Fragment::new("dance(?:es")])
            .unwrap();
        let compiler = PatternCompiler::new(Arc::new(corpus));

        match compiler.compile(&[&token]) {
            Err(CorpusError::BadFragment { category, fragment, .. }) => {
                assert_eq!(category, "BROKEN");
                assert_eq!(fragment, "dance(?:es");
            }
            other => panic!("expected BadFragment, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["breaking?", "танцы"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert!(matcher.is_match("BREAKING battle"));
        assert!(matcher.is_match("ТАНЦЫ вечер"));
    }

    #[test]
    fn test_latin_word_boundaries() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["dance"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert!(matcher.is_match("a dance party"));
        // No match inside a longer word.
        assert!(!matcher.is_match("abundance of caution"));
    }

    #[test]
    fn test_cyrillic_word_boundaries() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["танцы"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert!(matcher.is_match("вечер танцы музыка"));
        assert!(!matcher.is_match("втанцывали"));
    }

    #[test]
    fn test_hebrew_word_boundaries() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["רוקדים"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert!(matcher.is_match("אנחנו רוקדים הערב"));
    }

    #[test]
    fn test_cjk_contiguous_matching() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["街舞"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        // Matches inside running ideographic text, no separators needed.
        assert!(matcher.is_match("台北街舞大賽"));
    }

    #[test]
    fn test_thai_contiguous_matching() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["เต้น"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert!(matcher.is_match("การแข่งขันเต้นที่กรุงเทพ"));
    }

    #[test]
    fn test_find_matches_dedupes() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["dancers?"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        let matches = matcher.find_matches("dancer meets dancer and dancers");
        assert_eq!(
            matches.into_iter().collect::<Vec<_>>(),
            vec!["dancer".to_string(), "dancers".to_string()]
        );
    }

    #[test]
    fn test_empty_union_never_matches() {
        let corpus = KeywordCorpus::new();
        let token = corpus.token("EMPTY").unwrap();
        let compiler = PatternCompiler::new(Arc::new(corpus));
        let matcher = compiler.compile(&[&token]).unwrap();

        assert!(!matcher.is_match("anything at all"));
        assert!(!matcher.is_match(""));
    }

    #[test]
    fn test_wrap_and_remove() {
        let (corpus, tokens) = corpus_with(&[("DANCE", &["breaking"])]);
        let compiler = PatternCompiler::new(corpus);
        let matcher = compiler.compile(&[&tokens[0]]).unwrap();

        assert_eq!(
            matcher.wrap_matches("a breaking battle", "<b>", "</b>"),
            "a <b>breaking</b> battle"
        );
        assert_eq!(matcher.remove_matches("a breaking battle"), "a   battle");
    }
}
