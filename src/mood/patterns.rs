//! Sentence templates and literal mood phrases.
//!
//! A template is literal text with `{placeholder}` slots, e.g. `"drinking hot {drink}"`.
//! Each placeholder expands to the alternation of its replacement words and the whole
//! template is anchored at both ends, so a template only matches when it is the entire
//! normalized input. Templates are compiled once when the classifier is built.

use super::MoodCategory;
use super::lexicon::Lexicon;
use super::text::Utterance;
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// Bonus for an input that exactly matches a sentence template
pub const SENTENCE_PATTERN_WEIGHT: f64 = 1.5;
/// Bonus for an input containing a mood phrase
pub const MOOD_PHRASE_WEIGHT: f64 = 1.2;

/// Compile a template into an anchored regular expression
pub fn compile_template(
    template: &str,
    replacements: &BTreeMap<String, Vec<String>>,
) -> Result<Regex> {
    let mut pattern = String::from("^");
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, after_open) = rest.split_at(open);
        if literal.contains('}') {
            return Err(anyhow::anyhow!("Unbalanced '}}' in template '{}'", template));
        }
        pattern.push_str(&regex::escape(literal));

        let close = after_open
            .find('}')
            .ok_or_else(|| anyhow::anyhow!("Unclosed '{{' in template '{}'", template))?;
        let name = &after_open[1..close];
        let words = replacements.get(name).ok_or_else(|| {
            anyhow::anyhow!("Unknown placeholder '{{{}}}' in template '{}'", name, template)
        })?;

        let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
        pattern.push('(');
        pattern.push_str(&alternatives.join("|"));
        pattern.push(')');

        rest = &after_open[close + 1..];
    }

    if rest.contains('}') {
        return Err(anyhow::anyhow!("Unbalanced '}}' in template '{}'", template));
    }
    pattern.push_str(&regex::escape(rest));
    pattern.push('$');

    Regex::new(&pattern)
        .map_err(|e| anyhow::anyhow!("Template '{}' is not a valid pattern: {}", template, e))
}

/// Per-category compiled templates and phrases
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    sentences: BTreeMap<MoodCategory, Vec<Regex>>,
    phrases: BTreeMap<MoodCategory, Vec<String>>,
}

impl CompiledPatterns {
    pub fn compile(lexicon: &Lexicon) -> Result<Self> {
        let mut sentences = BTreeMap::new();
        let mut phrases = BTreeMap::new();

        for (category, profile) in &lexicon.profiles {
            let compiled = profile
                .sentence_patterns
                .iter()
                .map(|template| compile_template(template, &lexicon.word_replacements))
                .collect::<Result<Vec<_>>>()?;
            sentences.insert(*category, compiled);

            let lowered = profile
                .mood_phrases
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .filter(|phrase| !phrase.trim().is_empty())
                .collect();
            phrases.insert(*category, lowered);
        }

        Ok(CompiledPatterns { sentences, phrases })
    }

    /// Pattern and phrase bonus for one category
    pub fn score(&self, category: MoodCategory, utterance: &Utterance) -> f64 {
        let sentence_hits = self
            .sentences
            .get(&category)
            .map(|patterns| {
                patterns
                    .iter()
                    .filter(|p| p.is_match(&utterance.normalized))
                    .count()
            })
            .unwrap_or(0);

        let phrase_hits = self
            .phrases
            .get(&category)
            .map(|phrases| {
                phrases
                    .iter()
                    .filter(|phrase| utterance.normalized.contains(phrase.as_str()))
                    .count()
            })
            .unwrap_or(0);

        sentence_hits as f64 * SENTENCE_PATTERN_WEIGHT + phrase_hits as f64 * MOOD_PHRASE_WEIGHT
    }
}
