pub mod annotate;
pub mod classifier;
pub mod compiler;
pub mod config;
pub mod corpus;
pub mod error;
pub mod keyword_loader;
pub mod keywords;
pub mod language;
pub mod normalize;
pub mod score;
pub mod sifter;

pub use annotate::Annotator;
pub use classifier::{ClassificationEngine, ClassifiedEvent, Reason};
pub use compiler::{CompiledMatcher, PatternCompiler};
pub use config::Config;
pub use corpus::{BoundaryPolicy, Fragment, KeywordCorpus, Token};
pub use error::CorpusError;
pub use language::ScriptDetector;
pub use normalize::{EventRecord, SearchText, TextNormalizer};
pub use sifter::EventSifter;
