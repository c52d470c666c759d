use crate::config::Config;
use crate::models::{ChannelPlaylist, YouTubeApiResponse};
use crate::mood::ContentTitleLookup;
use crate::mood::enrichment::MAX_TITLES;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use ureq::Agent;
use urlencoding::encode;

const API_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

/// A blocking YouTube Data API client for playlist metadata
pub struct YouTubeClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    channel_id: String,
    cache_ttl: Duration,
    title_cache: Mutex<HashMap<String, (Instant, Vec<String>)>>,
}

impl YouTubeClient {
    /// Create a new client with configuration from environment
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .youtube_api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("YouTube API key is not configured (YOUTUBE_API_KEY)"))?;

        let agent = ureq::AgentBuilder::new()
            .timeout(config.enrichment_timeout)
            .build();

        Ok(YouTubeClient {
            agent,
            base_url: API_BASE_URL.to_string(),
            api_key,
            channel_id: config.channel_id.clone(),
            cache_ttl: config.title_cache_ttl,
            title_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Fetch up to 50 track titles from a playlist, served from cache while fresh
    pub fn fetch_playlist_titles(&self, playlist_id: &str) -> Result<Vec<String>> {
        if let Some(titles) = self.cached_titles(playlist_id) {
            log::debug!("Using cached titles for playlist {}", playlist_id);
            return Ok(titles);
        }

        let url = format!(
            "{}/playlistItems?part=snippet&maxResults={}&playlistId={}&key={}",
            self.base_url,
            MAX_TITLES,
            encode(playlist_id),
            encode(&self.api_key)
        );

        let response_text = self.get(&url)?;
        let titles = parse_playlist_titles(&response_text)?;
        log::debug!("Found {} titles in playlist {}", titles.len(), playlist_id);

        self.store_titles(playlist_id, &titles);
        Ok(titles)
    }

    /// Fetch every playlist on the configured channel
    pub fn fetch_channel_playlists(&self) -> Result<Vec<ChannelPlaylist>> {
        let url = format!(
            "{}/playlists?part=snippet,contentDetails&channelId={}&maxResults=50&key={}",
            self.base_url,
            encode(&self.channel_id),
            encode(&self.api_key)
        );

        let response_text = self.get(&url)?;
        let playlists = parse_channel_playlists(&response_text)?;
        log::info!("Found {} playlists on channel {}", playlists.len(), self.channel_id);
        Ok(playlists)
    }

    /// Send a GET request, surfacing the API's error message on HTTP failures
    fn get(&self, url: &str) -> Result<String> {
        match self.agent.get(url).call() {
            Ok(response) => Ok(response.into_string()?),
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<YouTubeApiResponse>(&body)
                    .ok()
                    .and_then(|parsed| parsed.error)
                    .map(|error| format!(" - {}", error.message))
                    .unwrap_or_default();
                Err(anyhow::anyhow!("YouTube API error: {}{}", code, message))
            }
            Err(e) => Err(anyhow::anyhow!("HTTP request failed: {}", e)),
        }
    }

    fn cached_titles(&self, playlist_id: &str) -> Option<Vec<String>> {
        let cache = match self.title_cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache
            .get(playlist_id)
            .filter(|(fetched_at, _)| fetched_at.elapsed() < self.cache_ttl)
            .map(|(_, titles)| titles.clone())
    }

    fn store_titles(&self, playlist_id: &str, titles: &[String]) {
        let mut cache = match self.title_cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.retain(|_, (fetched_at, _)| fetched_at.elapsed() < self.cache_ttl);
        cache.insert(playlist_id.to_string(), (Instant::now(), titles.to_vec()));
    }
}

impl ContentTitleLookup for YouTubeClient {
    fn fetch_titles(&self, content_id: &str) -> Result<Vec<String>> {
        self.fetch_playlist_titles(content_id)
    }
}

/// Extract item titles from a playlistItems response body
pub fn parse_playlist_titles(response_text: &str) -> Result<Vec<String>> {
    let parsed: YouTubeApiResponse = serde_json::from_str(response_text)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;

    if let Some(error) = parsed.error {
        return Err(anyhow::anyhow!(
            "YouTube API error {}: {}",
            error.code.unwrap_or_default(),
            error.message
        ));
    }

    Ok(parsed
        .items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| item.snippet)
        .map(|snippet| snippet.title)
        .take(MAX_TITLES)
        .collect())
}

/// Extract channel playlists from a playlists response body
pub fn parse_channel_playlists(response_text: &str) -> Result<Vec<ChannelPlaylist>> {
    let parsed: YouTubeApiResponse = serde_json::from_str(response_text)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;

    if let Some(error) = parsed.error {
        return Err(anyhow::anyhow!(
            "YouTube API error {}: {}",
            error.code.unwrap_or_default(),
            error.message
        ));
    }

    let items = parsed
        .items
        .ok_or_else(|| anyhow::anyhow!("Invalid API response: no playlists found"))?;

    Ok(items
        .into_iter()
        .filter_map(|item| {
            let snippet = item.snippet?;
            Some(ChannelPlaylist {
                id: item.id,
                thumbnail: snippet.thumbnails.best_url(),
                title: snippet.title,
                description: snippet.description,
                video_count: item
                    .content_details
                    .and_then(|details| details.item_count)
                    .unwrap_or(0),
            })
        })
        .collect())
}
