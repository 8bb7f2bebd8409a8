//! Feedback sentiment.
//!
//! A lexicon scorer produces a polarity in [-1, 1]; its sign alone decides
//! the label.

use std::collections::HashMap;

use crate::models::Sentiment;

/// Continuous sentiment score for free text.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

pub fn classify(scorer: &dyn PolarityScorer, text: &str) -> Sentiment {
    Sentiment::from_polarity(scorer.polarity(text))
}

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("outstanding", 1.0),
    ("brilliant", 0.9),
    ("impressive", 0.8),
    ("best", 1.0),
    ("better", 0.5),
    ("improved", 0.5),
    ("improving", 0.5),
    ("improvement", 0.4),
    ("consistent", 0.4),
    ("diligent", 0.6),
    ("hardworking", 0.6),
    ("attentive", 0.5),
    ("active", 0.3),
    ("engaged", 0.5),
    ("motivated", 0.6),
    ("enthusiastic", 0.7),
    ("focused", 0.4),
    ("helpful", 0.5),
    ("polite", 0.4),
    ("confident", 0.5),
    ("creative", 0.5),
    ("strong", 0.4),
    ("smart", 0.6),
    ("bright", 0.6),
    ("talented", 0.7),
    ("capable", 0.4),
    ("responsible", 0.4),
    ("punctual", 0.4),
    ("nice", 0.6),
    ("happy", 0.8),
    ("positive", 0.5),
    ("well", 0.3),
    ("participates", 0.3),
    ("understands", 0.3),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("poor", -0.6),
    ("poorly", -0.6),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("worse", -0.5),
    ("weak", -0.4),
    ("lazy", -0.7),
    ("careless", -0.5),
    ("distracted", -0.4),
    ("inattentive", -0.5),
    ("disruptive", -0.6),
    ("rude", -0.7),
    ("absent", -0.3),
    ("late", -0.3),
    ("struggles", -0.4),
    ("struggling", -0.4),
    ("fails", -0.5),
    ("failed", -0.5),
    ("failing", -0.5),
    ("unprepared", -0.5),
    ("irregular", -0.4),
    ("negligent", -0.6),
    ("disinterested", -0.5),
    ("unmotivated", -0.6),
    ("sad", -0.5),
    ("negative", -0.3),
    ("low", -0.2),
    ("problem", -0.3),
    ("problems", -0.3),
    ("difficult", -0.4),
    ("concern", -0.3),
    ("concerning", -0.4),
    ("declining", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("quite", 1.1),
    ("so", 1.2),
    ("too", 1.2),
    ("slightly", 0.6),
    ("somewhat", 0.7),
];

const NEGATORS: &[&str] = &["not", "no", "never", "hardly", "barely", "nor"];

/// Factor applied to the next scored word after a negator.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        let lexicon = POSITIVE
            .iter()
            .chain(NEGATIVE.iter())
            .copied()
            .collect();

        Self {
            lexicon,
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty());

        let mut total = 0.0;
        let mut scored = 0usize;
        let mut modifier = 1.0;
        let mut negated = false;

        for token in tokens {
            if Self::is_negator(token) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                modifier = *factor;
                continue;
            }
            if let Some(base) = self.lexicon.get(token) {
                let mut score = (base * modifier).clamp(-1.0, 1.0);
                if negated {
                    score *= NEGATION_FACTOR;
                }
                total += score;
                scored += 1;
                modifier = 1.0;
                negated = false;
            }
        }

        if scored == 0 {
            0.0
        } else {
            (total / scored as f64).clamp(-1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPolarity(f64);

    impl PolarityScorer for FixedPolarity {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn thresholds_on_sign() {
        assert_eq!(classify(&FixedPolarity(0.0), ""), Sentiment::Neutral);
        assert_eq!(classify(&FixedPolarity(0.01), ""), Sentiment::Positive);
        assert_eq!(classify(&FixedPolarity(-0.01), ""), Sentiment::Negative);
    }

    #[test]
    fn empty_and_unknown_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity(""), 0.0);
        assert_eq!(scorer.polarity("submitted the assignment on Tuesday"), 0.0);
        assert_eq!(classify(&scorer, ""), Sentiment::Neutral);
    }

    #[test]
    fn scores_feedback_vocabulary() {
        let scorer = LexiconScorer::new();
        assert_eq!(
            classify(&scorer, "Excellent work, very attentive in class"),
            Sentiment::Positive
        );
        assert_eq!(
            classify(&scorer, "Lazy and often distracted"),
            Sentiment::Negative
        );
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("good") > 0.0);
        assert!(scorer.polarity("not good") < 0.0);
        assert!(scorer.polarity("isn't bad") > 0.0);
    }

    #[test]
    fn polarity_stays_in_range() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.polarity("extremely excellent extremely outstanding");
        assert!((-1.0..=1.0).contains(&polarity));
        assert_eq!(polarity, 1.0);
    }
}
