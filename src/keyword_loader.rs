use crate::corpus::Fragment;
use crate::error::{CorpusError, Result};
use std::fs;
use std::path::Path;

/// The topical manual-keyword files loaded at startup. Hand-curated,
/// frequently updated lists of known crews, dancers, competitions and
/// terms across languages.
pub const MANUAL_KEYWORD_FILES: [&str; 8] = [
    "bboy_crews.txt",
    "bboys.txt",
    "choreo_crews.txt",
    "choreo_dancers.txt",
    "choreo_keywords.txt",
    "competitions.txt",
    "freestyle_crews.txt",
    "freestyle_dancers.txt",
];

/// Loads the manual keyword corpus from disk.
///
/// File format: one pattern fragment per line; everything from `#` to end
/// of line is a comment; blank lines are skipped. A line ending in the
/// literal suffix `,0` has the suffix stripped and is excluded from
/// automatic word-boundary wrapping. The two-character convention is
/// load-bearing: keeping or dropping the suffix changes match behavior.
pub struct KeywordLoader;

impl KeywordLoader {
    /// Load and concatenate all files, in file order then line order.
    /// A missing or unreadable file is fatal, as is ending up with no
    /// fragments at all: a silently inert manual category would degrade
    /// classification invisibly.
    pub fn load_directory(dir: &Path, files: &[String]) -> Result<Vec<Fragment>> {
        let mut fragments = Vec::new();
        for file in files {
            let path = dir.join(file);
            let content = fs::read_to_string(&path).map_err(|e| CorpusError::KeywordFile {
                path: path.display().to_string(),
                source: e,
            })?;
            let before = fragments.len();
            fragments.extend(content.lines().filter_map(Self::parse_line));
            log::info!(
                "loaded {} manual keywords from {}",
                fragments.len() - before,
                path.display()
            );
        }
        if fragments.is_empty() {
            return Err(CorpusError::EmptyManualCorpus { files: files.len() });
        }
        Ok(fragments)
    }

    fn parse_line(line: &str) -> Option<Fragment> {
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if let Some(stripped) = line.strip_suffix(",0") {
            Some(Fragment::contiguous(stripped))
        } else {
            Some(Fragment::new(line))
        }
    }
}
