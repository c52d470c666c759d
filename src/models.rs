use crate::mood::MoodCategory;
use serde::{Deserialize, Serialize};

/// A themed room backed by a YouTube playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub playlist_id: String, // also serves as the room's identifier/slug for matching
    #[serde(default)]
    pub category: Option<RoomCategory>,
    pub mood: String, // raw tag; rooms whose tag is not a known mood are never matched
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub channel_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_video: Option<CurrentVideo>,
}

/// Coarse room grouping used for catalog defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Study,
    Work,
    Relax,
    Focus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentVideo {
    pub id: String,
    pub title: String,
}

impl Room {
    /// The room's mood tag as a classifier category, if it is one
    pub fn mood_category(&self) -> Option<MoodCategory> {
        self.mood.parse().ok()
    }

    /// Lowercased identifier used for content lookups and slug matching
    pub fn identifier(&self) -> String {
        self.playlist_id.to_lowercase()
    }
}

impl Default for Room {
    fn default() -> Self {
        Room {
            id: String::new(),
            name: "Unknown".to_string(),
            description: String::new(),
            image: String::new(),
            playlist_id: String::new(),
            category: None,
            mood: String::new(),
            color: String::new(),
            channel_number: 0,
            current_video: None,
        }
    }
}

/// A playlist on the configured YouTube channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlaylist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_count: u32,
}

/// Response structure for playlists and playlistItems API calls
#[derive(Debug, Deserialize)]
pub struct YouTubeApiResponse {
    #[serde(default)]
    pub items: Option<Vec<YouTubeItem>>,
    pub error: Option<YouTubeApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct YouTubeApiErrorBody {
    pub code: Option<u16>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeItem {
    #[serde(default)]
    pub id: String,
    pub snippet: Option<YouTubeSnippet>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub item_count: Option<u32>,
}

impl Thumbnails {
    /// Highest resolution thumbnail available, or an empty string
    pub fn best_url(&self) -> String {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|thumbnail| thumbnail.url.clone())
            .next()
            .unwrap_or_default()
    }
}
