use crate::compiler::{CompiledMatcher, PatternCompiler};
use crate::error::Result;
use crate::keywords::Categories;
use crate::normalize::{EventRecord, SearchText, TextNormalizer};
use crate::score;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Why a record was (or was not) admitted to the event index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reason {
    /// A hand-curated crew/dancer/competition name matched.
    #[serde(rename = "manual-keyword")]
    ManualKeyword,
    /// An unambiguous dance-style term matched.
    #[serde(rename = "strong-style")]
    StrongStyle,
    /// A correlated music genre plus a real event signal.
    #[serde(rename = "music+event")]
    MusicAndEvent,
    /// A generic dance term plus a real event signal, no wrong-style
    /// evidence.
    #[serde(rename = "easy-dance+event")]
    EasyDanceAndEvent,
    /// A generic dance term plus a show/performance signal, with no
    /// club-only or wrong-style evidence.
    #[serde(rename = "dance-show-not-club")]
    DanceShowNotClub,
    /// The record had no name; classification was degraded to a negative
    /// verdict without matching.
    #[serde(rename = "no-name")]
    NoName,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::ManualKeyword => "manual-keyword",
            Reason::StrongStyle => "strong-style",
            Reason::MusicAndEvent => "music+event",
            Reason::EasyDanceAndEvent => "easy-dance+event",
            Reason::DanceShowNotClub => "dance-show-not-club",
            Reason::NoName => "no-name",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one record. Created fresh per call and never
/// cached by the engine; callers own storage.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedEvent {
    pub search_text: String,
    pub is_dance_event: bool,
    pub reason: Option<Reason>,
    pub dance_matches: BTreeSet<String>,
    pub event_matches: BTreeSet<String>,
    pub wrong_matches: BTreeSet<String>,
    pub match_score: u32,
    pub keyword_density: i32,
}

impl ClassifiedEvent {
    fn no_name() -> Self {
        ClassifiedEvent {
            search_text: String::new(),
            is_dance_event: false,
            reason: Some(Reason::NoName),
            dance_matches: BTreeSet::new(),
            event_matches: BTreeSet::new(),
            wrong_matches: BTreeSet::new(),
            match_score: 0,
            keyword_density: score::NO_MATCH_DENSITY,
        }
    }
}

/// Evaluates the ordered rule set over the per-category match sets.
///
/// Pure and reentrant after construction: every matcher is immutable and
/// shared, classification touches no engine state.
pub struct ClassificationEngine {
    manual: Arc<CompiledMatcher>,
    strong_dance: Arc<CompiledMatcher>,
    easy_dance: Arc<CompiledMatcher>,
    ambiguous_dance_music: Arc<CompiledMatcher>,
    easy_choreo: Arc<CompiledMatcher>,
    event: Arc<CompiledMatcher>,
    easy_event: Arc<CompiledMatcher>,
    club_and_event: Arc<CompiledMatcher>,
    club_only: Arc<CompiledMatcher>,
    dance_wrong_style: Arc<CompiledMatcher>,
    preprocess_removal: Arc<CompiledMatcher>,
}

impl ClassificationEngine {
    /// Compile every category union this engine evaluates. Freezes the
    /// involved tokens; fails fast on any uncompilable fragment.
    pub fn new(compiler: &PatternCompiler, categories: &Categories) -> Result<Self> {
        Ok(ClassificationEngine {
            manual: compiler.compile(&[&categories.manual])?,
            strong_dance: compiler.compile(&[&categories.strong_dance])?,
            easy_dance: compiler.compile(&[&categories.easy_dance])?,
            ambiguous_dance_music: compiler.compile(&[&categories.ambiguous_dance_music])?,
            easy_choreo: compiler.compile(&[&categories.easy_choreo])?,
            event: compiler.compile(&categories.event_tokens())?,
            easy_event: compiler.compile(&[&categories.easy_event])?,
            club_and_event: compiler.compile(&categories.club_and_event_tokens())?,
            club_only: compiler.compile(&[&categories.club_only])?,
            dance_wrong_style: compiler.compile(&[&categories.dance_wrong_style])?,
            preprocess_removal: compiler.compile(&[&categories.preprocess_removal])?,
        })
    }

    pub fn classify(&self, record: &EventRecord) -> ClassifiedEvent {
        match TextNormalizer::normalize(record) {
            SearchText::NoName => ClassifiedEvent::no_name(),
            SearchText::Text(text) => self.classify_text(&text),
        }
    }

    /// Classify an already-normalized search text.
    pub fn classify_text(&self, search_text: &str) -> ClassifiedEvent {
        // Known false-positive phrases are blanked before matching; the
        // reported text and the density denominator keep the original.
        let matchable = self.preprocess_removal.remove_matches(search_text);

        let manual_matches = self.manual.find_matches(&matchable);
        let strong_dance_matches = self.strong_dance.find_matches(&matchable);
        let easy_dance_matches = self.easy_dance.find_matches(&matchable);
        let music_matches = self.ambiguous_dance_music.find_matches(&matchable);
        let choreo_matches = self.easy_choreo.find_matches(&matchable);
        let event_matches = self.event.find_matches(&matchable);
        let easy_event_matches = self.easy_event.find_matches(&matchable);
        let club_and_event_matches = self.club_and_event.find_matches(&matchable);
        let club_only_matches = self.club_only.find_matches(&matchable);
        let wrong_style_matches = self.dance_wrong_style.find_matches(&matchable);

        let dance_matches: BTreeSet<String> = strong_dance_matches
            .iter()
            .chain(&easy_dance_matches)
            .chain(&music_matches)
            .chain(&choreo_matches)
            .chain(&manual_matches)
            .cloned()
            .collect();
        let all_event_matches: BTreeSet<String> = event_matches
            .iter()
            .chain(&easy_event_matches)
            .chain(&club_and_event_matches)
            .cloned()
            .collect();
        let wrong_matches: BTreeSet<String> = wrong_style_matches
            .iter()
            .chain(&club_only_matches)
            .cloned()
            .collect();

        // Ordered rules; the first satisfied rule wins. Rule order is
        // load-bearing: a strong style term admits the record even in the
        // presence of wrong-style evidence.
        let reason = if !manual_matches.is_empty() {
            Some(Reason::ManualKeyword)
        } else if !strong_dance_matches.is_empty() {
            Some(Reason::StrongStyle)
        } else if !music_matches.is_empty()
            && (!event_matches.is_empty() || !choreo_matches.is_empty())
        {
            Some(Reason::MusicAndEvent)
        } else if !easy_dance_matches.is_empty()
            && (!event_matches.is_empty() || !choreo_matches.is_empty())
            && wrong_style_matches.is_empty()
        {
            Some(Reason::EasyDanceAndEvent)
        } else if !easy_dance_matches.is_empty()
            && !club_and_event_matches.is_empty()
            && wrong_style_matches.is_empty()
            && club_only_matches.is_empty()
        {
            Some(Reason::DanceShowNotClub)
        } else {
            None
        };
        let is_dance_event = reason.is_some();

        if is_dance_event {
            log::debug!(
                "admitted ({}) dance={dance_matches:?} event={all_event_matches:?}",
                reason.map(|r| r.as_str()).unwrap_or("?"),
            );
        }

        let match_score = score::match_score(is_dance_event, &dance_matches, &all_event_matches);
        let combined = dance_matches.union(&all_event_matches).count();
        let keyword_density = score::keyword_density(search_text, combined);

        ClassifiedEvent {
            search_text: search_text.to_string(),
            is_dance_event,
            reason,
            dance_matches,
            event_matches: all_event_matches,
            wrong_matches,
            match_score,
            keyword_density,
        }
    }
}
