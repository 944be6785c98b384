use crate::compiler::{CompiledMatcher, PatternCompiler};
use crate::error::Result;
use crate::keywords::Categories;
use crate::normalize::{EventRecord, SearchText, TextNormalizer};
use std::collections::BTreeSet;
use std::sync::Arc;

pub const GOOD_OPEN: &str = "<em class=\"match-good\">";
pub const GOOD_CLOSE: &str = "</em>";
pub const BAD_OPEN: &str = "<em class=\"match-bad\">";
pub const BAD_CLOSE: &str = "</em>";

/// Renders matched evidence for human review. Purely a display aid:
/// independent of the verdict and never consulted for scoring.
pub struct Annotator {
    good: Arc<CompiledMatcher>,
    bad: Arc<CompiledMatcher>,
}

impl Annotator {
    /// Compile the combined "good" union (every dance and event category,
    /// manual included) and "bad" union (wrong-style and club-only).
    pub fn new(compiler: &PatternCompiler, categories: &Categories) -> Result<Self> {
        Ok(Annotator {
            good: compiler.compile(&categories.good_tokens())?,
            bad: compiler.compile(&categories.wrong_tokens())?,
        })
    }

    /// Wrap every positive-evidence match, then every negative-evidence
    /// match, each in a single leftmost-first substitution pass. All
    /// other characters pass through unchanged.
    pub fn highlight(&self, text: &str) -> String {
        let text = self.good.wrap_matches(text, GOOD_OPEN, GOOD_CLOSE);
        self.bad.wrap_matches(&text, BAD_OPEN, BAD_CLOSE)
    }

    /// Sorted distinct keywords (good and bad) found in a record, for
    /// review tooling.
    pub fn relevant_keywords(&self, record: &EventRecord) -> Vec<String> {
        match TextNormalizer::normalize(record) {
            SearchText::NoName => Vec::new(),
            SearchText::Text(text) => {
                let good = self.good.find_matches(&text);
                let bad = self.bad.find_matches(&text);
                let combined: BTreeSet<String> = good.union(&bad).cloned().collect();
                combined.into_iter().collect()
            }
        }
    }
}
