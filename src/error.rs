use thiserror::Error;

/// Errors raised while assembling or compiling the keyword corpus.
///
/// All of these are fatal at startup: a keyword that silently fails to
/// register or compile degrades classification invisibly. Per-record
/// classification itself never fails.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid category token '{0}': only alphanumerics and underscores are allowed")]
    InvalidTokenName(String),

    #[error("category '{0}' is frozen: a matcher was already compiled from it")]
    FrozenCategory(String),

    #[error("unknown category token '{0}'")]
    UnknownCategory(String),

    #[error("cannot compile fragment '{fragment}' of category '{category}'")]
    BadFragment {
        category: String,
        fragment: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("keyword file '{path}'")]
    KeywordFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("manual keyword corpus is empty after loading {files} file(s)")]
    EmptyManualCorpus { files: usize },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
