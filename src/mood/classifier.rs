use super::enrichment::TitleEnricher;
use super::lexicon::Lexicon;
use super::modifiers::{find_intensifiers, find_negations};
use super::patterns::CompiledPatterns;
use super::ranking::{RoomRanking, RoomScore};
use super::scoring::{MatchResult, MoodScoring};
use super::text::Utterance;
use crate::models::Room;
use anyhow::Result;
use std::collections::HashMap;

/// Maps free text to mood categories and picks the best room for it.
///
/// Holds only immutable tables, so one instance can serve any number of
/// concurrent callers. The optional title enricher is the only part that
/// touches the network, and its failures never change the outcome beyond
/// forfeiting a boost.
pub struct MoodClassifier {
    lexicon: Lexicon,
    patterns: CompiledPatterns,
    enricher: Option<TitleEnricher>,
}

impl std::fmt::Debug for MoodClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodClassifier")
            .field("categories", &self.lexicon.profiles.keys().collect::<Vec<_>>())
            .field("enrichment_timeout", &self.enricher.as_ref().map(|e| e.timeout()))
            .finish()
    }
}

impl MoodClassifier {
    /// Validate the lexicon and compile its sentence templates
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        lexicon.validate()?;
        let patterns = CompiledPatterns::compile(&lexicon)?;
        Ok(Self {
            lexicon,
            patterns,
            enricher: None,
        })
    }

    /// Enable best-effort content title enrichment during room ranking
    pub fn with_enricher(mut self, enricher: TitleEnricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Score every configured category, in category order, including
    /// zero and negative scores. Empty input scores nothing.
    pub fn score_all(&self, text: &str) -> Vec<MatchResult> {
        let utterance = Utterance::parse(text);
        self.score_utterance(&utterance)
    }

    /// Categories with a positive score, best first
    pub fn classify(&self, text: &str) -> Vec<MatchResult> {
        MoodScoring::rank(self.score_all(text))
    }

    /// The winning category, if any scored above zero
    pub fn best_match(&self, text: &str) -> Option<MatchResult> {
        self.classify(text).into_iter().next()
    }

    /// Rooms of the winning category with their final scores, best first.
    /// Empty when nothing matched or no room carries the winning mood.
    pub fn rank_rooms<'a>(&self, text: &str, rooms: &'a [Room]) -> Vec<RoomScore<'a>> {
        let utterance = Utterance::parse(text);
        let Some(best) = MoodScoring::rank(self.score_utterance(&utterance))
            .into_iter()
            .next()
        else {
            log::debug!("No mood category matched '{}'", utterance.normalized);
            return Vec::new();
        };

        let Some(profile) = self.lexicon.profile(best.category) else {
            return Vec::new();
        };

        let candidates = RoomRanking::candidates(best.category, rooms);
        if candidates.is_empty() {
            log::debug!("No rooms tagged '{}' in a catalog of {}", best.category, rooms.len());
            return Vec::new();
        }

        let titles = match &self.enricher {
            Some(enricher) => {
                let ids: Vec<&str> = candidates.iter().map(|r| r.playlist_id.as_str()).collect();
                enricher.fetch_all(&ids)
            }
            None => HashMap::new(),
        };

        let ranked = RoomRanking::rank(&best, profile, &utterance, &candidates, &titles);

        log::debug!(
            "Mood match for '{}': {} ({:.3}) terms={:?} context={:?} candidates={} scores={:?}",
            utterance.normalized,
            best.category,
            best.score,
            best.matched_terms,
            best.context_matches,
            candidates.len(),
            ranked
                .iter()
                .map(|r| (r.room.name.as_str(), r.score))
                .collect::<Vec<_>>()
        );

        ranked
    }

    /// The best room for `text`, or None so the caller can apply its own fallback
    pub fn match_room<'a>(&self, text: &str, rooms: &'a [Room]) -> Option<&'a Room> {
        self.rank_rooms(text, rooms).first().map(|r| r.room)
    }

    fn score_utterance(&self, utterance: &Utterance) -> Vec<MatchResult> {
        if utterance.is_empty() {
            return Vec::new();
        }

        let intensity_multiplier = find_intensifiers(utterance, &self.lexicon.intensifiers);
        let negations = find_negations(utterance, &self.lexicon);

        self.lexicon
            .profiles
            .iter()
            .map(|(category, profile)| {
                MoodScoring::score_category(
                    *category,
                    profile,
                    utterance,
                    &self.patterns,
                    intensity_multiplier,
                    &negations,
                    &self.lexicon,
                )
            })
            .collect()
    }
}
