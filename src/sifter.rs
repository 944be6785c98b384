use crate::annotate::Annotator;
use crate::classifier::{ClassificationEngine, ClassifiedEvent};
use crate::compiler::PatternCompiler;
use crate::config::Config;
use crate::error::Result;
use crate::keyword_loader::KeywordLoader;
use crate::keywords::{self, Categories};
use crate::normalize::EventRecord;
use std::path::Path;
use std::sync::Arc;

/// The assembled classification stack: corpus, compiled matchers, engine
/// and annotator, built once at process warm-up and shared read-only
/// afterwards.
///
/// Construction is the only place mutation happens. Once built, every
/// method is a pure function of immutable matchers and the input text,
/// safe for unbounded concurrent use.
pub struct EventSifter {
    compiler: PatternCompiler,
    categories: Categories,
    engine: ClassificationEngine,
    annotator: Annotator,
}

impl EventSifter {
    /// Build the full stack from a config: builtin taxonomy, manual
    /// keyword files, compiled unions. Any failure here aborts startup.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (corpus, categories) = keywords::builtin_corpus()?;

        let manual = KeywordLoader::load_directory(
            Path::new(&config.keyword_dir),
            &config.manual_files,
        )?;
        log::info!("registering {} manual keywords", manual.len());
        corpus.register(&categories.manual, manual)?;

        let compiler = PatternCompiler::new(Arc::new(corpus));
        let engine = ClassificationEngine::new(&compiler, &categories)?;
        let annotator = Annotator::new(&compiler, &categories)?;

        Ok(EventSifter {
            compiler,
            categories,
            engine,
            annotator,
        })
    }

    pub fn classify(&self, record: &EventRecord) -> ClassifiedEvent {
        self.engine.classify(record)
    }

    pub fn classify_text(&self, search_text: &str) -> ClassifiedEvent {
        self.engine.classify_text(search_text)
    }

    pub fn highlight(&self, text: &str) -> String {
        self.annotator.highlight(text)
    }

    pub fn relevant_keywords(&self, record: &EventRecord) -> Vec<String> {
        self.annotator.relevant_keywords(record)
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// (category, fragment count) pairs for diagnostics output.
    pub fn corpus_summary(&self) -> Vec<(String, usize)> {
        self.compiler.corpus().summary()
    }
}
