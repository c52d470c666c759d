#[cfg(test)]
mod tests {
    use super::super::enrichment::MockContentTitleLookup;
    use super::super::*;
    use crate::models::Room;
    use approx::assert_relative_eq;
    use std::sync::Arc;
    use std::time::Duration;

    fn classifier() -> MoodClassifier {
        MoodClassifier::new(Lexicon::default()).unwrap()
    }

    fn create_room(id: &str, name: &str, playlist_id: &str, mood: &str) -> Room {
        Room {
            id: id.to_string(),
            name: name.to_string(),
            playlist_id: playlist_id.to_string(),
            mood: mood.to_string(),
            ..Room::default()
        }
    }

    fn score_for(results: &[MatchResult], category: MoodCategory) -> f64 {
        results
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.score)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_negation_flips_category_sign() {
        let classifier = classifier();

        let plain = classifier.score_all("relaxed");
        let negated = classifier.score_all("not relaxed");

        assert_relative_eq!(score_for(&plain, MoodCategory::Chill), 0.9, epsilon = 1e-9);
        assert_relative_eq!(score_for(&negated, MoodCategory::Chill), -0.9, epsilon = 1e-9);

        assert_eq!(
            classifier.best_match("relaxed").map(|r| r.category),
            Some(MoodCategory::Chill)
        );
        assert!(
            classifier
                .classify("not relaxed")
                .iter()
                .all(|r| r.category != MoodCategory::Chill)
        );
    }

    #[test]
    fn test_intensifier_raises_score() {
        let classifier = classifier();
        let plain = classifier.best_match("relaxed").unwrap();
        let intense = classifier.best_match("very relaxed").unwrap();

        assert_eq!(plain.category, MoodCategory::Chill);
        assert_eq!(intense.category, MoodCategory::Chill);
        assert!(intense.score > plain.score);
        assert_relative_eq!(intense.score, plain.score * 1.3, epsilon = 1e-9);
    }

    #[test]
    fn test_super_energetic_outscores_plain() {
        let classifier = classifier();
        let plain = classifier.score_all("energetic");
        let intense = classifier.score_all("super energetic morning workout");

        assert!(score_for(&intense, MoodCategory::Energetic) > score_for(&plain, MoodCategory::Energetic));
        assert!(score_for(&intense, MoodCategory::Upbeat) > score_for(&plain, MoodCategory::Upbeat));
        assert_eq!(
            classifier.best_match("super energetic morning workout").map(|r| r.category),
            Some(MoodCategory::Energetic)
        );
    }

    #[test]
    fn test_rainy_afternoon_selects_rainy_room() {
        let classifier = classifier();
        let rooms = vec![
            create_room("sunny-gym", "Sunny Gym", "PLgym", "upbeat"),
            create_room("rainy-cafe", "Rainy Cafe", "PLcafe", "rainy"),
        ];

        let best = classifier.best_match("rainy afternoon with tea").unwrap();
        assert_eq!(best.category, MoodCategory::Rainy);
        assert_eq!(best.matched_terms, vec!["rainy"]);
        assert_eq!(best.context_matches.weather, vec!["rainy"]);
        assert_eq!(best.context_matches.time_of_day, vec!["afternoon"]);

        let room = classifier.match_room("rainy afternoon with tea", &rooms).unwrap();
        assert_eq!(room.id, "rainy-cafe");
    }

    #[test]
    fn test_empty_and_punctuation_input_has_no_match() {
        let classifier = classifier();
        let rooms = vec![create_room("1", "Anything", "PL1", "chill")];

        for input in ["", "   ", "?!...", "-- !!"] {
            assert!(classifier.score_all(input).is_empty(), "input {input:?}");
            assert!(classifier.classify(input).is_empty(), "input {input:?}");
            assert!(classifier.match_room(input, &rooms).is_none(), "input {input:?}");
        }
    }

    #[test]
    fn test_negated_peaceful_is_not_selected() {
        let classifier = classifier();
        let ranked = classifier.classify("not peaceful");
        assert!(ranked.iter().all(|r| r.category != MoodCategory::Peaceful));
        assert!(score_for(&classifier.score_all("not peaceful"), MoodCategory::Peaceful) < 0.0);
    }

    #[test]
    fn test_negation_scope_is_local() {
        let classifier = classifier();
        let results = classifier.score_all("not sad but very happy");

        assert!(score_for(&results, MoodCategory::Sad) < 0.0);
        assert!(score_for(&results, MoodCategory::Upbeat) > 0.0);
        assert_eq!(
            classifier.best_match("not sad but very happy").map(|r| r.category),
            Some(MoodCategory::Upbeat)
        );
    }

    #[test]
    fn test_no_room_in_winning_category() {
        let classifier = classifier();
        let rooms = vec![create_room("gym", "Sunny Gym", "PLgym", "upbeat")];

        assert!(classifier.rank_rooms("rainy afternoon with tea", &rooms).is_empty());
        assert!(classifier.match_room("rainy afternoon with tea", &rooms).is_none());
        assert!(classifier.match_room("rainy afternoon with tea", &[]).is_none());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = classifier();
        let rooms = vec![
            create_room("1", "Rainy Cafe", "PLcafe", "rainy"),
            create_room("2", "Storm Watch", "PLstorm", "rainy"),
        ];
        let input = "listening to thunder on a cloudy evening";

        assert_eq!(classifier.classify(input), classifier.classify(input));
        assert_eq!(
            classifier.match_room(input, &rooms).map(|r| r.id.clone()),
            classifier.match_room(input, &rooms).map(|r| r.id.clone())
        );
    }

    #[test]
    fn test_classify_is_sorted_descending() {
        let classifier = classifier();
        let ranked = classifier.classify("cozy autumn afternoon reading in the library");
        assert!(!ranked.is_empty());
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(ranked.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn test_sentence_pattern_drives_focus() {
        let classifier = classifier();
        let best = classifier.best_match("Need to study").unwrap();
        assert_eq!(best.category, MoodCategory::Focus);
        assert_relative_eq!(best.score, 1.5 * 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_typo_still_matches() {
        let classifier = classifier();
        let best = classifier.best_match("feeling peacefol").unwrap();
        assert_eq!(best.category, MoodCategory::Chill);
        assert_eq!(best.matched_terms, vec!["peaceful"]);
    }

    #[test]
    fn test_quoted_words_still_match() {
        let classifier = classifier();
        for input in ["feeling relaxed", "feeling \"relaxed\"", "feeling 'relaxed'"] {
            assert_eq!(
                classifier.best_match(input).map(|r| r.category),
                Some(MoodCategory::Chill),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_room_name_breaks_ties_within_category() {
        let classifier = classifier();
        let rooms = vec![
            create_room("1", "Study Hall", "PLa", "focus"),
            create_room("2", "Library Nights", "PLb", "focus"),
        ];
        let room = classifier.match_room("focused in the library", &rooms).unwrap();
        assert_eq!(room.id, "2");
    }

    #[test]
    fn test_unconfigured_category_is_unreachable() {
        let mut lexicon = Lexicon::default();
        lexicon.profiles.remove(&MoodCategory::Sad);
        let classifier = MoodClassifier::new(lexicon).unwrap();
        let rooms = vec![create_room("blue", "Blue Room", "PLblue", "sad")];

        assert!(classifier.score_all("sad").iter().all(|r| r.category != MoodCategory::Sad));
        assert!(classifier.match_room("sad", &rooms).is_none());
    }

    #[test]
    fn test_bad_template_is_a_configuration_error() {
        let mut lexicon = Lexicon::default();
        if let Some(profile) = lexicon.profiles.get_mut(&MoodCategory::Chill) {
            profile.sentence_patterns.push("sipping {beverage}".to_string());
        }
        assert!(MoodClassifier::new(lexicon).is_err());
    }

    #[test]
    fn test_enrichment_boosts_matching_room() {
        let rooms = vec![
            create_room("one", "Cabin One", "PLone", "winter"),
            create_room("two", "Cabin Two", "PLtwo", "winter"),
        ];

        let plain = classifier();
        assert_eq!(plain.match_room("snowy", &rooms).unwrap().id, "one");

        let mut lookup = MockContentTitleLookup::new();
        lookup.expect_fetch_titles().returning(|id| match id {
            "PLtwo" => Ok(vec!["Snowy Cabin Nights".to_string()]),
            _ => Ok(vec!["Lofi Beats".to_string()]),
        });
        let enriched = classifier()
            .with_enricher(TitleEnricher::new(Arc::new(lookup), Duration::from_secs(2)));

        let ranked = enriched.rank_rooms("snowy", &rooms);
        assert_eq!(ranked[0].room.id, "two");
        // weather term in the title (1.25) and a direct token hit (1.35)
        assert_relative_eq!(ranked[0].score, 1.2 * 0.7 * 1.25 * 1.35, epsilon = 1e-9);
    }

    #[test]
    fn test_enrichment_failure_keeps_base_ranking() {
        let rooms = vec![
            create_room("one", "Cabin One", "PLone", "winter"),
            create_room("two", "Cabin Two", "PLtwo", "winter"),
        ];

        let mut lookup = MockContentTitleLookup::new();
        lookup
            .expect_fetch_titles()
            .times(2)
            .returning(|_| Err(anyhow::anyhow!("network unreachable")));
        let enriched = classifier()
            .with_enricher(TitleEnricher::new(Arc::new(lookup), Duration::from_secs(2)));

        let ranked = enriched.rank_rooms("snowy", &rooms);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].room.id, "one");
        assert_relative_eq!(ranked[0].score, ranked[1].score);
        assert_relative_eq!(ranked[0].score, 1.2 * 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_enrichment_not_called_without_match() {
        let mut lookup = MockContentTitleLookup::new();
        lookup.expect_fetch_titles().never();
        let enriched = classifier()
            .with_enricher(TitleEnricher::new(Arc::new(lookup), Duration::from_secs(2)));
        let rooms = vec![create_room("one", "Cabin One", "PLone", "winter")];

        assert!(enriched.match_room("", &rooms).is_none());
        assert!(enriched.match_room("qwerty", &rooms).is_none());
    }
}
