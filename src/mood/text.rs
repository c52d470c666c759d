/// Similarity a pair of words must exceed to count as a match
pub const MATCH_THRESHOLD: f64 = 0.8;

/// Similarity assigned when one word contains the other
const CONTAINMENT_SIMILARITY: f64 = 0.8;

/// Free text split into normalized tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub tokens: Vec<String>,
    pub normalized: String, // tokens re-joined with single spaces
}

impl Utterance {
    /// Lowercase, split on whitespace runs and strip edge punctuation (quotes included)
    /// from each token. Interior punctuation survives so "can't" and "laid-back" stay
    /// single tokens.
    pub fn parse(text: &str) -> Self {
        let tokens: Vec<String> = text
            .trim()
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|word| !word.is_empty())
            .collect();
        let normalized = tokens.join(" ");

        Utterance { tokens, normalized }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `len` consecutive tokens starting at `start`, joined by a space
    pub fn window(&self, start: usize, len: usize) -> Option<String> {
        if len == 0 || start + len > self.tokens.len() {
            return None;
        }
        Some(self.tokens[start..start + len].join(" "))
    }

    /// Positions where `term` matches above the threshold, with the similarity of each hit.
    /// Multi-word terms are compared against windows of the same word count.
    pub fn term_hits(&self, term: &str) -> Vec<(usize, f64)> {
        let word_count = term.split_whitespace().count().max(1);
        if word_count > self.tokens.len() {
            return Vec::new();
        }

        (0..=self.tokens.len() - word_count)
            .filter_map(|start| {
                let candidate = if word_count == 1 {
                    self.tokens[start].clone()
                } else {
                    self.window(start, word_count)?
                };
                let score = similarity(&candidate, term);
                (score > MATCH_THRESHOLD).then_some((start, score))
            })
            .collect()
    }

    /// How many times `phrase` occurs as a run of whole tokens
    pub fn count_words(&self, phrase: &str) -> usize {
        let phrase_words: Vec<&str> = phrase.split_whitespace().collect();
        if phrase_words.is_empty() || phrase_words.len() > self.tokens.len() {
            return 0;
        }
        self.tokens
            .windows(phrase_words.len())
            .filter(|window| window.iter().zip(&phrase_words).all(|(a, b)| a == b))
            .count()
    }
}

/// Fuzzy word similarity in [0, 1].
///
/// Equal strings score 1.0, an empty string against a non-empty one scores 0.0,
/// containment scores 0.8 and everything else is the normalized Levenshtein
/// similarity.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if shorter == longer {
        return 1.0;
    }
    if shorter.is_empty() {
        return 0.0;
    }
    if longer.contains(shorter) {
        return CONTAINMENT_SIMILARITY;
    }

    strsim::normalized_levenshtein(shorter, longer)
}
