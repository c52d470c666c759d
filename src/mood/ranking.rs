use super::lexicon::MoodProfile;
use super::scoring::MatchResult;
use super::text::{MATCH_THRESHOLD, Utterance, similarity};
use super::{ContextDimension, MoodCategory};
use crate::models::Room;
use std::collections::HashMap;

const NAME_TOKEN_BOOST: f64 = 1.5;
const IDENTIFIER_TOKEN_BOOST: f64 = 1.3;

const WEATHER_CONTEXT_BOOST: f64 = 1.2;
const TIME_OF_DAY_CONTEXT_BOOST: f64 = 1.2;
const ACTIVITY_CONTEXT_BOOST: f64 = 1.3;
const SEASON_CONTEXT_BOOST: f64 = 1.4;

const IDENTIFIER_PRIMARY_BOOST: f64 = 1.3;
const IDENTIFIER_RELATED_BOOST: f64 = 1.2;

const IDENTIFIER_WORK_BOOST: f64 = 1.4;
const IDENTIFIER_KEYWORD_BOOST: f64 = 1.3;
const WORK_KEYWORDS: [&str; 2] = ["study", "work"];
const TIME_KEYWORDS: [&str; 4] = ["morning", "afternoon", "evening", "night"];
const WEATHER_KEYWORDS: [&str; 5] = ["rain", "snow", "storm", "sunny", "cloudy"];

const TITLE_PRIMARY_BOOST: f64 = 1.4;
const TITLE_RELATED_BOOST: f64 = 1.2;
const TITLE_SEASON_BOOST: f64 = 1.3;
const TITLE_WEATHER_BOOST: f64 = 1.25;
const TITLE_TOKEN_BOOST: f64 = 1.35;

/// Final score of one candidate room
#[derive(Debug, Clone, PartialEq)]
pub struct RoomScore<'a> {
    pub room: &'a Room,
    pub score: f64,
}

/// Re-ranking of rooms inside the winning mood category
pub struct RoomRanking;

impl RoomRanking {
    /// Rooms tagged with `category`, in catalog order
    pub fn candidates(category: MoodCategory, rooms: &[Room]) -> Vec<&Room> {
        rooms
            .iter()
            .filter(|room| room.mood_category() == Some(category))
            .collect()
    }

    /// Score every candidate and sort best first. Equal scores keep catalog order.
    pub fn rank<'a>(
        best: &MatchResult,
        profile: &MoodProfile,
        utterance: &Utterance,
        candidates: &[&'a Room],
        titles: &HashMap<String, Vec<String>>,
    ) -> Vec<RoomScore<'a>> {
        let mut scores: Vec<RoomScore<'a>> = candidates
            .iter()
            .map(|&room| {
                let room_titles = titles.get(&room.playlist_id).map(|t| t.as_slice());
                RoomScore {
                    room,
                    score: Self::score_room(best, profile, utterance, room, room_titles),
                }
            })
            .collect();

        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scores
    }

    /// Category score boosted multiplicatively by how well the room itself fits the input
    pub fn score_room(
        best: &MatchResult,
        profile: &MoodProfile,
        utterance: &Utterance,
        room: &Room,
        titles: Option<&[String]>,
    ) -> f64 {
        let mut score = best.score;
        let name = room.name.to_lowercase();
        let identifier = room.identifier();

        if let Some(titles) = titles {
            for title in titles {
                score *= Self::title_boost(profile, utterance, title);
            }
        }

        let context_boosts = [
            (ContextDimension::Weather, WEATHER_CONTEXT_BOOST),
            (ContextDimension::TimeOfDay, TIME_OF_DAY_CONTEXT_BOOST),
            (ContextDimension::Activities, ACTIVITY_CONTEXT_BOOST),
            (ContextDimension::Seasons, SEASON_CONTEXT_BOOST),
        ];
        for (dimension, boost) in context_boosts {
            let present = best
                .context_matches
                .get(dimension)
                .iter()
                .filter(|term| !term.is_empty())
                .any(|term| name.contains(term.as_str()) || identifier.contains(term.as_str()));
            if present {
                score *= boost;
            }
        }

        if Self::contains_any(&identifier, &profile.primary_terms) {
            score *= IDENTIFIER_PRIMARY_BOOST;
        }
        if Self::contains_any(&identifier, &profile.related_terms) {
            score *= IDENTIFIER_RELATED_BOOST;
        }

        score *= NAME_TOKEN_BOOST.powi(Self::token_hits(utterance, &name));

        if !identifier.is_empty() {
            score *= IDENTIFIER_TOKEN_BOOST.powi(Self::token_hits(utterance, &identifier));

            let input = &utterance.normalized;
            if WORK_KEYWORDS.iter().any(|k| input.contains(k))
                && WORK_KEYWORDS.iter().any(|k| identifier.contains(k))
            {
                score *= IDENTIFIER_WORK_BOOST;
            }
            for keyword in TIME_KEYWORDS.iter().chain(WEATHER_KEYWORDS.iter()) {
                if input.contains(keyword) && identifier.contains(keyword) {
                    score *= IDENTIFIER_KEYWORD_BOOST;
                }
            }
        }

        score
    }

    /// Combined multiplier contributed by one lowercased content title
    fn title_boost(profile: &MoodProfile, utterance: &Utterance, title: &str) -> f64 {
        let mut boost = 1.0;
        let substring_boosts = [
            (&profile.primary_terms, TITLE_PRIMARY_BOOST),
            (&profile.related_terms, TITLE_RELATED_BOOST),
            (&profile.season_terms, TITLE_SEASON_BOOST),
            (&profile.weather_terms, TITLE_WEATHER_BOOST),
        ];
        for (terms, factor) in substring_boosts {
            let hits = terms
                .iter()
                .filter(|term| !term.is_empty() && title.contains(&term.to_lowercase()))
                .count();
            boost *= factor.powi(hits as i32);
        }
        boost * TITLE_TOKEN_BOOST.powi(Self::token_hits(utterance, title))
    }

    /// Number of (input token, text word) pairs that match above the threshold
    fn token_hits(utterance: &Utterance, text: &str) -> i32 {
        let words = Utterance::parse(text).tokens;
        let hits = utterance
            .tokens
            .iter()
            .flat_map(|token| words.iter().map(move |word| similarity(token, word)))
            .filter(|score| *score > MATCH_THRESHOLD)
            .count();
        hits as i32
    }

    fn contains_any(text: &str, terms: &[String]) -> bool {
        !text.is_empty()
            && terms
                .iter()
                .any(|term| !term.is_empty() && text.contains(&term.to_lowercase()))
    }
}
