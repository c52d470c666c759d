use super::{ContextDimension, MoodCategory};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vocabulary and priors for a single mood category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodProfile {
    pub primary_terms: Vec<String>,
    pub related_terms: Vec<String>,
    #[serde(default)]
    pub activity_terms: Vec<String>,
    #[serde(default)]
    pub location_terms: Vec<String>,
    #[serde(default)]
    pub weather_terms: Vec<String>,
    #[serde(default)]
    pub time_of_day_terms: Vec<String>,
    #[serde(default)]
    pub season_terms: Vec<String>,
    pub intensity: f64, // prior in (0, 1], scales the final category score
    #[serde(default)]
    pub sentence_patterns: Vec<String>, // templates such as "drinking hot {drink}"
    #[serde(default)]
    pub mood_phrases: Vec<String>, // literal substrings implying the category
}

impl MoodProfile {
    /// Term list for one contextual dimension
    pub fn context_terms(&self, dimension: ContextDimension) -> &[String] {
        match dimension {
            ContextDimension::Activities => &self.activity_terms,
            ContextDimension::Locations => &self.location_terms,
            ContextDimension::Weather => &self.weather_terms,
            ContextDimension::TimeOfDay => &self.time_of_day_terms,
            ContextDimension::Seasons => &self.season_terms,
        }
    }
}

/// Intensity modifiers found in user input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensifierWords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
    pub negation: Vec<String>, // flips the sign of the whole multiplier
}

/// Immutable lexicon consumed by the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    pub profiles: BTreeMap<MoodCategory, MoodProfile>,
    pub intensifiers: IntensifierWords,
    pub negation_words: Vec<String>, // words that scope-negate nearby matches
    pub word_replacements: BTreeMap<String, Vec<String>>, // sentence pattern placeholders
}

impl Lexicon {
    /// Load a lexicon from a JSON file
    pub fn load_from_file(path: &str) -> Result<Lexicon> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read lexicon '{}': {}", path, e))?;
        let lexicon: Lexicon = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse lexicon '{}': {}", path, e))?;
        lexicon.validate()?;
        log::info!(
            "Loaded lexicon from {} with {} mood categories",
            path,
            lexicon.profiles.len()
        );
        Ok(lexicon)
    }

    /// Check the invariants a hand-written lexicon could break
    pub fn validate(&self) -> Result<()> {
        for (category, profile) in &self.profiles {
            if !(profile.intensity > 0.0 && profile.intensity <= 1.0) {
                return Err(anyhow::anyhow!(
                    "Mood '{}' has intensity {} outside (0, 1]",
                    category,
                    profile.intensity
                ));
            }
        }
        Ok(())
    }

    pub fn profile(&self, category: MoodCategory) -> Option<&MoodProfile> {
        self.profiles.get(&category)
    }

    /// Whether a word belongs to the scope-negation list
    pub fn is_negation(&self, word: &str) -> bool {
        self.negation_words.iter().any(|w| w == word)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();

        profiles.insert(
            MoodCategory::Chill,
            MoodProfile {
                primary_terms: words(&["relaxed", "calm", "peaceful", "mellow", "zen", "tranquil", "laid-back", "easy-going"]),
                related_terms: words(&["comfortable", "content", "cozy", "restful", "casual", "light", "steady", "balanced", "cool"]),
                activity_terms: words(&["reading", "napping", "lounging", "chilling", "resting", "breathing", "meditating"]),
                location_terms: words(&["couch", "bed", "hammock", "garden", "patio", "balcony"]),
                weather_terms: words(&["mild", "warm", "sunny", "breezy"]),
                time_of_day_terms: words(&["evening", "sunset", "dusk", "night"]),
                season_terms: words(&["spring", "summer"]),
                intensity: 0.6,
                sentence_patterns: Vec::new(),
                mood_phrases: words(&[
                    "want to relax",
                    "need to chill",
                    "time to unwind",
                    "taking it easy",
                    "winding down",
                    "relaxation time",
                ]),
            },
        );

        profiles.insert(
            MoodCategory::Upbeat,
            MoodProfile {
                primary_terms: words(&["happy", "energetic", "positive", "motivated", "excited", "cheerful", "lively", "upbeat"]),
                related_terms: words(&["optimistic", "bright", "uplifting", "fun", "joyful", "enthusiastic", "inspired", "pumped"]),
                activity_terms: words(&["dancing", "exercising", "running", "working out", "cleaning", "cooking", "creating"]),
                location_terms: words(&["gym", "park", "studio", "kitchen", "office"]),
                weather_terms: words(&["sunny", "clear", "bright"]),
                time_of_day_terms: words(&["morning", "sunrise", "noon", "afternoon"]),
                season_terms: words(&["spring", "summer"]),
                intensity: 0.8,
                sentence_patterns: Vec::new(),
                mood_phrases: words(&[
                    "feeling good",
                    "in a good mood",
                    "ready to",
                    "excited to",
                    "lets go",
                    "pumped up",
                ]),
            },
        );

        profiles.insert(
            MoodCategory::Peaceful,
            MoodProfile {
                primary_terms: words(&["serene", "quiet", "gentle", "soothing", "harmonious", "meditative", "peaceful"]),
                related_terms: words(&["mindful", "still", "soft", "calming", "relaxing", "contemplative", "balanced", "grounded"]),
                activity_terms: words(&["meditating", "yoga", "reading", "journaling", "painting", "gardening", "stargazing"]),
                location_terms: words(&["garden", "forest", "beach", "mountain", "lake", "temple", "study"]),
                weather_terms: words(&["misty", "foggy", "light rain", "cloudy"]),
                time_of_day_terms: words(&["dawn", "dusk", "night", "early morning"]),
                season_terms: words(&["autumn", "spring"]),
                intensity: 0.4,
                sentence_patterns: Vec::new(),
                mood_phrases: words(&[
                    "need peace",
                    "want quiet",
                    "some silence",
                    "calm environment",
                    "peaceful setting",
                    "tranquil space",
                ]),
            },
        );

        profiles.insert(
            MoodCategory::Energetic,
            MoodProfile {
                primary_terms: words(&["dynamic", "active", "vibrant", "spirited", "enthusiastic", "powerful", "energetic"]),
                related_terms: words(&["strong", "determined", "focused", "driven", "passionate", "fierce", "unstoppable", "productive"]),
                activity_terms: words(&["working", "studying", "coding", "writing", "brainstorming", "creating", "designing"]),
                location_terms: words(&["office", "library", "cafe", "desk", "studio"]),
                weather_terms: words(&["clear", "sunny", "energizing"]),
                time_of_day_terms: words(&["morning", "afternoon", "day"]),
                season_terms: words(&["summer", "spring"]),
                intensity: 1.0,
                sentence_patterns: Vec::new(),
                mood_phrases: words(&[
                    "ready to work",
                    "lets do this",
                    "time to hustle",
                    "getting started",
                    "full of energy",
                    "feeling productive",
                ]),
            },
        );

        profiles.insert(
            MoodCategory::Winter,
            MoodProfile {
                primary_terms: words(&["cozy", "warm", "snug", "comfortable", "hygge", "intimate", "winter"]),
                related_terms: words(&["peaceful", "quiet", "gentle", "soft", "calm", "restful", "cold", "chilly"]),
                activity_terms: words(&["drinking cocoa", "drinking tea", "reading", "knitting", "cuddling", "watching snow"]),
                location_terms: words(&["indoors", "fireplace", "cabin", "home", "blanket fort"]),
                weather_terms: words(&["cold", "snowy", "frosty", "chilly", "icy", "winter", "freezing"]),
                time_of_day_terms: words(&["evening", "night", "early morning"]),
                season_terms: words(&["winter"]),
                intensity: 0.7,
                sentence_patterns: words(&[
                    "drinking hot {drink}",
                    "cold {time}",
                    "snowy {time}",
                    "winter {activity}",
                    "by the fireplace",
                    "wrapped in {item}",
                    "staying warm",
                    "cozy {location}",
                ]),
                mood_phrases: Vec::new(),
            },
        );

        profiles.insert(
            MoodCategory::Rainy,
            MoodProfile {
                primary_terms: words(&["peaceful", "calm", "relaxed", "contemplative", "cozy", "rainy"]),
                related_terms: words(&["quiet", "gentle", "soft", "soothing", "tranquil", "wet", "damp"]),
                activity_terms: words(&["reading", "writing", "watching rain", "napping", "drinking tea"]),
                location_terms: words(&["window", "indoors", "cafe", "library", "bed"]),
                weather_terms: words(&["rain", "rainy", "drizzle", "storm", "thunder", "cloudy", "overcast"]),
                time_of_day_terms: words(&["morning", "afternoon", "evening"]),
                season_terms: words(&["autumn", "spring"]),
                intensity: 0.5,
                sentence_patterns: words(&[
                    "watching the rain",
                    "rainy {time}",
                    "listening to {weather}",
                    "thunder{action}",
                    "under the rain",
                    "{action} by the window",
                ]),
                mood_phrases: Vec::new(),
            },
        );

        profiles.insert(
            MoodCategory::Focus,
            MoodProfile {
                primary_terms: words(&["focused", "concentrated", "productive", "determined", "efficient", "studious"]),
                related_terms: words(&["studying", "working", "learning", "creating", "developing", "attentive"]),
                activity_terms: words(&["studying", "working", "coding", "writing", "reading", "researching"]),
                location_terms: words(&["library", "office", "desk", "study room", "cafe"]),
                weather_terms: words(&["clear", "neutral", "calm"]),
                time_of_day_terms: words(&["morning", "afternoon", "late night"]),
                season_terms: words(&["any"]),
                intensity: 0.9,
                sentence_patterns: words(&[
                    "need to {work}",
                    "have to {work}",
                    "time to {work}",
                    "getting some {work} done",
                    "working on {project}",
                    "{work} session",
                    "deep {work}",
                ]),
                mood_phrases: Vec::new(),
            },
        );

        profiles.insert(
            MoodCategory::Sad,
            MoodProfile {
                primary_terms: words(&["sad", "melancholic", "nostalgic", "emotional", "reflective", "sentimental"]),
                related_terms: words(&["down", "blue", "gloomy", "pensive", "thoughtful", "wistful", "yearning"]),
                activity_terms: words(&["reflecting", "thinking", "remembering", "writing", "listening"]),
                location_terms: words(&["bedroom", "quiet place", "window", "alone"]),
                weather_terms: words(&["rainy", "cloudy", "gloomy", "misty"]),
                time_of_day_terms: words(&["night", "evening", "late hours"]),
                season_terms: words(&["autumn", "winter"]),
                intensity: 0.6,
                sentence_patterns: Vec::new(),
                mood_phrases: Vec::new(),
            },
        );

        profiles.insert(
            MoodCategory::Autumn,
            MoodProfile {
                primary_terms: words(&["autumn", "fall", "harvest", "pumpkin", "cozy", "crisp"]),
                related_terms: words(&["golden", "leaves", "amber", "rustic", "warm", "earthy", "mellow"]),
                activity_terms: words(&["reading", "walking", "drinking tea", "baking", "studying", "reflecting"]),
                location_terms: words(&["porch", "garden", "park", "cafe", "library", "home"]),
                weather_terms: words(&["crisp", "cool", "breezy", "cloudy", "misty"]),
                time_of_day_terms: words(&["morning", "afternoon", "evening", "dusk"]),
                season_terms: words(&["autumn", "fall"]),
                intensity: 0.7,
                sentence_patterns: words(&[
                    "fall {time}",
                    "autumn {activity}",
                    "pumpkin {drink}",
                    "harvest {time}",
                    "falling leaves",
                    "cozy autumn",
                ]),
                mood_phrases: Vec::new(),
            },
        );

        let mut word_replacements = BTreeMap::new();
        word_replacements.insert("drink".to_string(), words(&["cocoa", "chocolate", "tea", "coffee", "cider", "latte", "spice"]));
        word_replacements.insert("time".to_string(), words(&["morning", "afternoon", "evening", "night", "day", "season", "vibes"]));
        word_replacements.insert("activity".to_string(), words(&["vibes", "mood", "feeling", "day", "study", "reading", "walk"]));
        word_replacements.insert("item".to_string(), words(&["blanket", "sweater", "scarf"]));
        word_replacements.insert("location".to_string(), words(&["inside", "indoors", "home", "room"]));
        word_replacements.insert("weather".to_string(), words(&["rain", "storm", "thunder"]));
        word_replacements.insert("action".to_string(), words(&["ing", "y", ""]));
        word_replacements.insert("work".to_string(), words(&["study", "work", "focus", "concentrate", "research", "code", "write"]));
        word_replacements.insert("project".to_string(), words(&["homework", "project", "assignment", "paper", "code", "thesis"]));
        word_replacements.insert("season".to_string(), words(&["spring", "summer", "autumn", "fall"]));

        Lexicon {
            profiles,
            intensifiers: IntensifierWords {
                high: words(&["very", "super", "extremely", "really", "quite", "so", "totally", "absolutely", "incredibly"]),
                medium: words(&["pretty", "rather", "fairly", "somewhat", "kind of", "sort of"]),
                low: words(&["slightly", "a bit", "a little", "mildly"]),
                negation: words(&["not", "dont", "cant", "cannot", "won't"]),
            },
            negation_words: words(&["not", "dont", "can't", "cannot", "no", "never"]),
            word_replacements,
        }
    }
}
