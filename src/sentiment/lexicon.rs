// Lexicon-based polarity analyzer.
//
// Runs entirely in-process — no model files, no network. Each sentiment word
// found in the text contributes its lexicon polarity; the text's polarity is
// the mean of those contributions. Two rules adjust a contribution:
//
//   - intensifiers directly before the word scale it ("very good" > "good")
//   - a negation earlier in the same clause flips and halves it
//     ("not good" = -0.35, not -0.7)
//
// Clause punctuation resets both rules.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use regex_lite::Regex;
use tracing::debug;

use super::traits::PolarityAnalyzer;
use super::words::{INTENSIFIERS, NEGATIONS, POLARITY};

/// Multiplier applied to a sentiment word preceded by a negation.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Tokens: emoticons, words with an optional contraction, clause punctuation.
/// Emoticons come first so ";)" isn't read as a clause break.
const TOKEN_PATTERN: &str = r"[:;]-?[()d]|[a-z]+(?:'[a-z]+)?|[.,;!?]";

pub struct LexiconAnalyzer {
    token_re: Regex,
    polarity: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconAnalyzer {
    /// Build an analyzer over the built-in English lexicon.
    pub fn new() -> Result<Self> {
        Ok(Self {
            token_re: Regex::new(TOKEN_PATTERN)?,
            polarity: POLARITY.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        })
    }

    /// Synchronous core of the analyzer, usable outside an async context.
    pub fn analyze(&self, text: &str) -> f64 {
        // Normalize typographic apostrophes so "don’t" matches "don't".
        let normalized = text.to_lowercase().replace('\u{2019}', "'");

        let mut contributions: Vec<f64> = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in self.token_re.find_iter(&normalized).map(|m| m.as_str()) {
            if is_clause_break(token) {
                negated = false;
                intensity = 1.0;
                continue;
            }
            if self.negations.contains(token) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }
            match self.polarity.get(token) {
                Some(&base) => {
                    let mut value = base * intensity;
                    if negated {
                        value *= NEGATION_FACTOR;
                    }
                    contributions.push(value.clamp(-1.0, 1.0));
                    negated = false;
                    intensity = 1.0;
                }
                // An intensifier only applies to the word right after it.
                None => intensity = 1.0,
            }
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

fn is_clause_break(token: &str) -> bool {
    matches!(token, "." | "," | ";" | "!" | "?")
}

#[async_trait]
impl PolarityAnalyzer for LexiconAnalyzer {
    async fn polarity(&self, text: &str) -> Result<f64> {
        let polarity = self.analyze(text);
        debug!(polarity, chars = text.chars().count(), "Computed lexicon polarity");
        Ok(polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> LexiconAnalyzer {
        LexiconAnalyzer::new().unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unknown_text_is_neutral() {
        let a = analyzer();
        assert_eq!(a.analyze(""), 0.0);
        assert_eq!(a.analyze("the quarterly report is attached"), 0.0);
    }

    #[test]
    fn averages_sentiment_words() {
        // love 0.5, wonderful 1.0
        let p = analyzer().analyze("I love this, it's wonderful");
        assert!(approx(p, 0.75), "got {p}");
    }

    #[test]
    fn case_insensitive() {
        let a = analyzer();
        assert!(approx(a.analyze("TERRIBLE"), a.analyze("terrible")));
    }

    #[test]
    fn negation_flips_and_dampens() {
        let p = analyzer().analyze("this is not good");
        assert!(approx(p, 0.7 * NEGATION_FACTOR), "got {p}");
    }

    #[test]
    fn contraction_negation() {
        let p = analyzer().analyze("I don\u{2019}t like it");
        assert!(approx(p, 0.2 * NEGATION_FACTOR), "got {p}");
    }

    #[test]
    fn negation_resets_at_clause_break() {
        // "not" is cut off by the comma, so "good" keeps its sign
        let p = analyzer().analyze("not today, good work");
        assert!(approx(p, 0.7), "got {p}");
    }

    #[test]
    fn intensifier_scales_next_word() {
        let p = analyzer().analyze("very bad");
        assert!(approx(p, -0.7 * 1.3), "got {p}");
    }

    #[test]
    fn intensifier_only_reaches_adjacent_word() {
        let p = analyzer().analyze("very much bad");
        assert!(approx(p, -0.7), "got {p}");
    }

    #[test]
    fn intensified_contribution_is_clamped() {
        let p = analyzer().analyze("extremely awful");
        assert!(approx(p, -1.0), "got {p}");
    }

    #[test]
    fn emoticons_count() {
        let a = analyzer();
        assert!(a.analyze("see you :)") > 0.0);
        assert!(a.analyze("missed it :(") < 0.0);
        // ";)" is an emoticon, not a clause break followed by noise
        assert!(a.analyze("sure ;)") > 0.0);
    }

    #[tokio::test]
    async fn trait_matches_sync_core() {
        let a = analyzer();
        let text = "great job";
        assert_eq!(a.polarity(text).await.unwrap(), a.analyze(text));
    }
}
