use super::lexicon::{Lexicon, MoodProfile};
use super::modifiers::is_negated;
use super::patterns::CompiledPatterns;
use super::text::Utterance;
use super::{ContextDimension, MoodCategory};
use serde::Serialize;

/// Weight of a primary term hit. Observed variants used 1.2 and 1.5; 1.5 is kept.
pub const PRIMARY_WEIGHT: f64 = 1.5;
/// Weight of a related term hit
pub const RELATED_WEIGHT: f64 = 0.8;

/// Contextual terms matched in the input, grouped by dimension
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMatches {
    pub activities: Vec<String>,
    pub locations: Vec<String>,
    pub weather: Vec<String>,
    pub time_of_day: Vec<String>,
    pub seasons: Vec<String>,
}

impl ContextMatches {
    pub fn get(&self, dimension: ContextDimension) -> &[String] {
        match dimension {
            ContextDimension::Activities => &self.activities,
            ContextDimension::Locations => &self.locations,
            ContextDimension::Weather => &self.weather,
            ContextDimension::TimeOfDay => &self.time_of_day,
            ContextDimension::Seasons => &self.seasons,
        }
    }

    fn get_mut(&mut self, dimension: ContextDimension) -> &mut Vec<String> {
        match dimension {
            ContextDimension::Activities => &mut self.activities,
            ContextDimension::Locations => &mut self.locations,
            ContextDimension::Weather => &mut self.weather,
            ContextDimension::TimeOfDay => &mut self.time_of_day,
            ContextDimension::Seasons => &mut self.seasons,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContextDimension::ALL.iter().all(|d| self.get(*d).is_empty())
    }
}

/// Score of one mood category for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub category: MoodCategory,
    pub score: f64,
    pub matched_terms: Vec<String>,
    pub context_matches: ContextMatches,
}

/// Primary/related term hits with the token position of each
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalScore {
    pub score: f64,
    pub terms: Vec<String>,
    pub positions: Vec<usize>,
}

/// Scoring functionality for mood categories
pub struct MoodScoring;

impl MoodScoring {
    /// Fuzzy primary/related term hits. Tokens that are negation words are skipped.
    pub fn lexical_score(
        profile: &MoodProfile,
        utterance: &Utterance,
        lexicon: &Lexicon,
    ) -> LexicalScore {
        let weighted_terms = profile
            .primary_terms
            .iter()
            .map(|term| (term, PRIMARY_WEIGHT))
            .chain(profile.related_terms.iter().map(|term| (term, RELATED_WEIGHT)));

        let mut hits: Vec<(usize, &String, f64)> = Vec::new();
        for (term, weight) in weighted_terms {
            for (position, similarity) in utterance.term_hits(term) {
                if lexicon.is_negation(&utterance.tokens[position]) {
                    continue;
                }
                hits.push((position, term, similarity * weight));
            }
        }
        // Report hits in input order
        hits.sort_by_key(|(position, _, _)| *position);

        LexicalScore {
            score: hits.iter().map(|(_, _, score)| score).sum(),
            terms: hits.iter().map(|(_, term, _)| (*term).clone()).collect(),
            positions: hits.iter().map(|(position, _, _)| *position).collect(),
        }
    }

    /// Weighted hits over the five contextual dimensions
    pub fn contextual_score(profile: &MoodProfile, utterance: &Utterance) -> (f64, ContextMatches) {
        let mut score = 0.0;
        let mut matches = ContextMatches::default();

        for dimension in ContextDimension::ALL {
            let weight = dimension.weight();
            for term in profile.context_terms(dimension) {
                for (_, similarity) in utterance.term_hits(term) {
                    score += similarity * weight;
                    matches.get_mut(dimension).push(term.clone());
                }
            }
        }

        (score, matches)
    }

    /// Full score for one category: lexical, contextual and pattern components scaled
    /// by the category prior and the input's intensity, then negated if any lexical hit
    /// sits inside a negation window.
    pub fn score_category(
        category: MoodCategory,
        profile: &MoodProfile,
        utterance: &Utterance,
        patterns: &CompiledPatterns,
        intensity_multiplier: f64,
        negations: &[usize],
        lexicon: &Lexicon,
    ) -> MatchResult {
        let lexical = Self::lexical_score(profile, utterance, lexicon);
        let (contextual, context_matches) = Self::contextual_score(profile, utterance);
        let pattern = patterns.score(category, utterance);

        let mut score = (lexical.score + contextual + pattern)
            * profile.intensity
            * intensity_multiplier.abs();

        let negated = lexical
            .positions
            .iter()
            .any(|position| is_negated(*position, negations));
        if negated {
            score = -score;
        }

        MatchResult {
            category,
            score,
            matched_terms: lexical.terms,
            context_matches,
        }
    }

    /// Keep strictly positive scores, best first. Ties keep category order.
    pub fn rank(results: Vec<MatchResult>) -> Vec<MatchResult> {
        let mut ranked: Vec<MatchResult> = results.into_iter().filter(|r| r.score > 0.0).collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
