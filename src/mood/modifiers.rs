use super::lexicon::{IntensifierWords, Lexicon};
use super::text::Utterance;

/// Maximum token distance between a negation and the match it negates
pub const NEGATION_WINDOW: usize = 2;

const HIGH_STEP: f64 = 0.30;
const MEDIUM_STEP: f64 = 0.15;
const LOW_STEP: f64 = 0.05;

/// Signed intensity multiplier for the whole input.
///
/// Starts at 1.0 and grows additively for every intensifier occurrence.
/// Any intensifier-negation word flips the sign of the result.
pub fn find_intensifiers(utterance: &Utterance, words: &IntensifierWords) -> f64 {
    let high = count_all(utterance, &words.high);
    let medium = count_all(utterance, &words.medium);
    let low = count_all(utterance, &words.low);

    let multiplier =
        1.0 + high as f64 * HIGH_STEP + medium as f64 * MEDIUM_STEP + low as f64 * LOW_STEP;

    let negated = words
        .negation
        .iter()
        .any(|word| utterance.count_words(word) > 0);

    if negated { -multiplier } else { multiplier }
}

/// Token positions of every scope-negation word in the input, in order
pub fn find_negations(utterance: &Utterance, lexicon: &Lexicon) -> Vec<usize> {
    utterance
        .tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| lexicon.is_negation(token))
        .map(|(position, _)| position)
        .collect()
}

/// Whether a match at `position` lies within the negation window of any negation.
/// Coarse: a negation near one term negates the whole category.
pub fn is_negated(position: usize, negations: &[usize]) -> bool {
    negations
        .iter()
        .any(|negation| negation.abs_diff(position) <= NEGATION_WINDOW)
}

fn count_all(utterance: &Utterance, phrases: &[String]) -> usize {
    phrases.iter().map(|phrase| utterance.count_words(phrase)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn multiplier(text: &str) -> f64 {
        let lexicon = Lexicon::default();
        find_intensifiers(&Utterance::parse(text), &lexicon.intensifiers)
    }

    #[test]
    fn test_no_intensifiers_is_neutral() {
        assert_relative_eq!(multiplier("relaxed"), 1.0, epsilon = 1e-9);
        assert_relative_eq!(multiplier(""), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_intensifiers_compound_additively() {
        assert_relative_eq!(multiplier("very relaxed"), 1.3, epsilon = 1e-9);
        assert_relative_eq!(multiplier("very very relaxed"), 1.6, epsilon = 1e-9);
        assert_relative_eq!(multiplier("super pretty slightly calm"), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_multi_word_intensifiers() {
        assert_relative_eq!(multiplier("kind of sleepy"), 1.15, epsilon = 1e-9);
        assert_relative_eq!(multiplier("a little tired"), 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_negation_flips_whole_multiplier() {
        assert_relative_eq!(multiplier("not relaxed"), -1.0, epsilon = 1e-9);
        assert_relative_eq!(multiplier("really not relaxed"), -1.3, epsilon = 1e-9);
    }

    #[test]
    fn test_find_negations_positions() {
        let lexicon = Lexicon::default();
        let negations = find_negations(&Utterance::parse("no I can't and never will"), &lexicon);
        assert_eq!(negations, vec![0, 2, 4]);
        assert_eq!(find_negations(&Utterance::parse("'can't' stop"), &lexicon), vec![0]);
    }

    #[test]
    fn test_negation_window() {
        let negations = vec![3];
        assert!(is_negated(1, &negations));
        assert!(is_negated(5, &negations));
        assert!(!is_negated(0, &negations));
        assert!(!is_negated(6, &negations));
        assert!(!is_negated(0, &[]));
    }
}
