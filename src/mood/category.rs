use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood tags shared by rooms and classified input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Chill,
    Upbeat,
    Peaceful,
    Energetic,
    Winter,
    Rainy,
    Focus,
    Sad,
    Autumn,
}

impl MoodCategory {
    /// Every category in evaluation order (ties between equal scores keep this order)
    pub const ALL: [MoodCategory; 9] = [
        MoodCategory::Chill,
        MoodCategory::Upbeat,
        MoodCategory::Peaceful,
        MoodCategory::Energetic,
        MoodCategory::Winter,
        MoodCategory::Rainy,
        MoodCategory::Focus,
        MoodCategory::Sad,
        MoodCategory::Autumn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Chill => "chill",
            MoodCategory::Upbeat => "upbeat",
            MoodCategory::Peaceful => "peaceful",
            MoodCategory::Energetic => "energetic",
            MoodCategory::Winter => "winter",
            MoodCategory::Rainy => "rainy",
            MoodCategory::Focus => "focus",
            MoodCategory::Sad => "sad",
            MoodCategory::Autumn => "autumn",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MoodCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown mood category: '{}'", s))
    }
}

/// Situational cue dimensions that support a mood category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextDimension {
    Activities,
    Locations,
    Weather,
    TimeOfDay,
    Seasons,
}

impl ContextDimension {
    pub const ALL: [ContextDimension; 5] = [
        ContextDimension::Activities,
        ContextDimension::Locations,
        ContextDimension::Weather,
        ContextDimension::TimeOfDay,
        ContextDimension::Seasons,
    ];

    /// Fixed score multiplier for a similarity hit in this dimension
    pub fn weight(&self) -> f64 {
        match self {
            ContextDimension::Activities => 1.0,
            ContextDimension::Locations => 0.8,
            ContextDimension::Weather => 1.2,
            ContextDimension::TimeOfDay => 0.6,
            ContextDimension::Seasons => 1.5,
        }
    }
}
