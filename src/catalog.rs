use crate::models::{ChannelPlaylist, Room, RoomCategory};
use crate::mood::MoodCategory;
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;

/// Default look and mood for each room category
struct RoomDefaults {
    image: &'static str,
    color: &'static str,
    mood: MoodCategory,
}

fn room_defaults(category: RoomCategory) -> RoomDefaults {
    match category {
        RoomCategory::Study => RoomDefaults {
            image: "/images/cafe.jpg",
            color: "bg-amber-500",
            mood: MoodCategory::Chill,
        },
        RoomCategory::Work => RoomDefaults {
            image: "/images/city.jpg",
            color: "bg-purple-600",
            mood: MoodCategory::Peaceful,
        },
        RoomCategory::Relax => RoomDefaults {
            image: "/images/garden.jpg",
            color: "bg-green-500",
            mood: MoodCategory::Peaceful,
        },
        RoomCategory::Focus => RoomDefaults {
            image: "/images/coding.jpg",
            color: "bg-blue-600",
            mood: MoodCategory::Upbeat,
        },
    }
}

/// The rooms available for matching
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        let catalog = Self { rooms };
        let unreachable = catalog
            .rooms
            .iter()
            .filter(|room| room.mood_category().is_none())
            .count();
        if unreachable > 0 {
            log::warn!(
                "{} of {} rooms have an unknown mood and will never be matched",
                unreachable,
                catalog.rooms.len()
            );
        }
        catalog
    }

    /// Load rooms directly from a JSON array file
    pub fn load_from_file(path: &str) -> Result<RoomCatalog> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read rooms file '{}': {}", path, e))?;
        let rooms: Vec<Room> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rooms file '{}': {}", path, e))?;
        log::info!("Loaded {} rooms from {}", rooms.len(), path);
        Ok(RoomCatalog::new(rooms))
    }

    /// Build one room per channel playlist
    pub fn from_playlists(playlists: &[ChannelPlaylist]) -> RoomCatalog {
        let rooms = playlists
            .iter()
            .enumerate()
            .map(|(index, playlist)| {
                let category = determine_category(&playlist.title, index);
                let defaults = room_defaults(category);
                Room {
                    id: playlist.id.clone(),
                    name: playlist.title.clone(),
                    description: if playlist.description.trim().is_empty() {
                        format!("Enjoy the vibes of {}", playlist.title)
                    } else {
                        playlist.description.clone()
                    },
                    image: if playlist.thumbnail.is_empty() {
                        defaults.image.to_string()
                    } else {
                        playlist.thumbnail.clone()
                    },
                    playlist_id: playlist.id.clone(),
                    category: Some(category),
                    mood: defaults.mood.to_string(),
                    color: defaults.color.to_string(),
                    channel_number: index as u32 + 1,
                    current_video: None,
                }
            })
            .collect();
        RoomCatalog::new(rooms)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn by_mood(&self, mood: MoodCategory) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.mood_category() == Some(mood))
            .collect()
    }

    pub fn by_category(&self, category: RoomCategory) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.category == Some(category))
            .collect()
    }

    /// Any room, for callers falling back after "no match"
    pub fn random_room<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Room> {
        self.rooms.choose(rng)
    }
}

/// Room category from playlist title keywords, rotating through categories when none match
pub fn determine_category(title: &str, index: usize) -> RoomCategory {
    let title = title.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| title.contains(word));

    if mentions(&["study", "cafe", "coffee"]) {
        return RoomCategory::Study;
    }
    if mentions(&["work", "focus", "productivity"]) {
        return RoomCategory::Work;
    }
    if mentions(&["relax", "chill", "ambient"]) {
        return RoomCategory::Relax;
    }

    const ROTATION: [RoomCategory; 4] = [
        RoomCategory::Study,
        RoomCategory::Work,
        RoomCategory::Relax,
        RoomCategory::Focus,
    ];
    ROTATION[index % ROTATION.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playlist(id: &str, title: &str) -> ChannelPlaylist {
        ChannelPlaylist {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            video_count: 0,
        }
    }

    #[test]
    fn test_determine_category_keywords() {
        assert_eq!(determine_category("Late Night Coffee Shop", 3), RoomCategory::Study);
        assert_eq!(determine_category("Deep FOCUS beats", 0), RoomCategory::Work);
        assert_eq!(determine_category("Ambient Forest", 1), RoomCategory::Relax);
    }

    #[test]
    fn test_determine_category_rotates() {
        assert_eq!(determine_category("Untitled", 0), RoomCategory::Study);
        assert_eq!(determine_category("Untitled", 1), RoomCategory::Work);
        assert_eq!(determine_category("Untitled", 2), RoomCategory::Relax);
        assert_eq!(determine_category("Untitled", 3), RoomCategory::Focus);
        assert_eq!(determine_category("Untitled", 4), RoomCategory::Study);
    }

    #[test]
    fn test_from_playlists_applies_defaults() {
        let catalog = RoomCatalog::from_playlists(&[
            playlist("PLa", "Cafe Mornings"),
            playlist("PLb", "Snow Drift"),
        ]);

        assert_eq!(catalog.len(), 2);
        let cafe = catalog.get("PLa").unwrap();
        assert_eq!(cafe.category, Some(RoomCategory::Study));
        assert_eq!(cafe.mood_category(), Some(MoodCategory::Chill));
        assert_eq!(cafe.image, "/images/cafe.jpg");
        assert_eq!(cafe.description, "Enjoy the vibes of Cafe Mornings");
        assert_eq!(cafe.channel_number, 1);
        assert_eq!(cafe.playlist_id, "PLa");

        // Rotation at index 1 lands on work, which defaults to peaceful
        let snow = catalog.get("PLb").unwrap();
        assert_eq!(snow.category, Some(RoomCategory::Work));
        assert_eq!(snow.mood, "peaceful");
        assert_eq!(snow.channel_number, 2);
    }

    #[test]
    fn test_lookups() {
        let catalog = RoomCatalog::from_playlists(&[
            playlist("PL1", "Chill Garden"),
            playlist("PL2", "Relaxing Rain"),
            playlist("PL3", "Workday"),
        ]);
        assert_eq!(catalog.by_mood(MoodCategory::Peaceful).len(), 3);
        assert_eq!(catalog.by_category(RoomCategory::Relax).len(), 2);
        assert!(catalog.by_mood(MoodCategory::Sad).is_empty());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_random_room() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(RoomCatalog::default().random_room(&mut rng).is_none());

        let catalog = RoomCatalog::from_playlists(&[playlist("PL1", "Only Room")]);
        assert_eq!(catalog.random_room(&mut rng).unwrap().id, "PL1");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("mood_rooms_catalog_test.json");
        let json = r#"[
            {"id": "rainy-cafe", "name": "Rainy Cafe", "playlistId": "PLrain", "mood": "rainy", "category": "study", "channelNumber": 4},
            {"id": "jazz", "name": "Jazz Bar", "mood": "jazzy"}
        ]"#;
        std::fs::write(&path, json).unwrap();

        let catalog = RoomCatalog::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("rainy-cafe").unwrap().channel_number, 4);
        assert_eq!(catalog.by_mood(MoodCategory::Rainy).len(), 1);

        std::fs::remove_file(&path).ok();
        assert!(RoomCatalog::load_from_file("/nonexistent/rooms.json").is_err());
    }
}
