//! Sentiment labelling for summaries.
//!
//! A valence lexicon gives each known word a score between -4 and +4. Word
//! scores are summed, flipped and dampened when a negation precedes them, and
//! squashed into a compound score in `[-1, 1]`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::nlp::{TreebankTokenizer, WordTokenizer};

/// Compound score at or above which text reads as positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text reads as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Normalisation constant for the compound score
const ALPHA: f64 = 15.0;
/// Multiplier applied to a negated word's valence
const NEGATION_SCALAR: f64 = -0.74;
/// How many preceding tokens a negation reaches
const NEGATION_WINDOW: usize = 3;

lazy_static! {
    static ref VALENCE: HashMap<&'static str, f64> = [
        ("good", 1.9), ("great", 3.1), ("excellent", 2.7), ("amazing", 2.8),
        ("wonderful", 2.7), ("happy", 2.7), ("happiness", 2.6), ("joy", 2.8),
        ("love", 3.2), ("loved", 2.9), ("hope", 1.9), ("hopeful", 2.3),
        ("helpful", 1.8), ("help", 1.7), ("support", 1.7), ("supportive", 1.9),
        ("care", 2.2), ("calm", 1.3), ("relief", 2.1), ("safe", 1.9),
        ("success", 2.7), ("successful", 2.8), ("win", 2.8), ("wins", 2.7),
        ("improve", 1.9), ("improved", 2.1), ("improvement", 2.0), ("better", 1.9),
        ("best", 3.2), ("benefit", 2.0), ("benefits", 1.6), ("healthy", 1.7),
        ("healing", 1.4), ("recover", 1.6), ("recovery", 1.4), ("strong", 2.3),
        ("strength", 2.2), ("positive", 2.6), ("optimistic", 1.3), ("progress", 1.8),
        ("thrive", 2.1), ("kind", 2.4), ("kindness", 2.0), ("friend", 2.2),
        ("friends", 2.1), ("friendly", 2.2), ("peace", 2.5), ("peaceful", 2.2),
        ("celebrate", 2.7), ("proud", 2.1), ("glad", 2.0), ("grateful", 2.0),
        ("trust", 2.3), ("loyal", 2.1), ("fun", 2.3), ("laugh", 2.6),
        ("smile", 1.5), ("free", 2.3), ("encouraging", 2.4), ("inspiring", 2.2),
        ("resilient", 1.6), ("resilience", 1.7), ("boost", 1.7), ("gain", 2.4),
        ("bad", -2.5), ("worse", -2.1), ("worst", -3.1), ("terrible", -2.1),
        ("awful", -2.0), ("horrible", -2.5), ("sad", -2.1), ("sadness", -1.9),
        ("unhappy", -1.8), ("depressed", -2.3), ("depression", -1.9), ("anxiety", -0.7),
        ("anxious", -1.0), ("stress", -1.8), ("stressed", -1.4), ("fear", -2.2),
        ("afraid", -2.0), ("scared", -1.9), ("worry", -1.9), ("worried", -1.2),
        ("lonely", -1.9), ("loneliness", -1.8), ("pain", -2.3), ("hurt", -2.4),
        ("suffer", -2.1), ("suffering", -2.1), ("crisis", -3.1), ("disaster", -3.1),
        ("danger", -2.4), ("dangerous", -2.1), ("risk", -1.1), ("threat", -2.4),
        ("death", -2.9), ("dead", -3.3), ("die", -2.9), ("died", -2.6),
        ("kill", -3.7), ("killed", -3.5), ("war", -2.9), ("violence", -3.1),
        ("attack", -2.1), ("abuse", -3.2), ("hate", -2.7), ("angry", -2.3),
        ("anger", -2.7), ("problem", -1.7), ("problems", -1.7), ("fail", -2.5),
        ("failed", -2.3), ("failure", -2.3), ("loss", -1.3), ("lost", -1.3),
        ("poor", -2.1), ("sick", -2.3), ("illness", -1.4), ("harm", -2.5),
        ("harmful", -2.6), ("shortage", -1.2), ("struggle", -1.3), ("struggling", -1.6),
        ("tragic", -3.4), ("grief", -2.2), ("victim", -2.3), ("victims", -2.1),
        ("cut", -1.1), ("cuts", -1.2), ("decline", -1.1), ("worsening", -2.0),
        ("suicide", -3.5), ("trauma", -2.1), ("alarming", -2.2), ("warning", -1.4),
    ]
    .into_iter()
    .collect();

    static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
        "without", "cannot", "n't", "n’t", "isnt", "arent", "wasnt", "dont", "doesnt",
        "didnt", "cant", "wont", "couldnt", "shouldnt", "wouldnt",
    ]
    .into_iter()
    .collect();
}

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label a compound score
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Value plotted on the sentiment trend line
    pub fn trend_value(self) -> i8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Produces a compound polarity score in `[-1, 1]`.
pub trait PolarityScorer {
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon-based polarity with negation handling.
#[derive(Debug, Clone, Default)]
pub struct LexiconPolarity {
    tokenizer: TreebankTokenizer,
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summed valence of the text before normalisation
    pub fn raw_score(&self, text: &str) -> f64 {
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());
        tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let valence = *VALENCE.get(token.as_str())?;
                let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
                let negated = window.iter().any(|t| NEGATIONS.contains(t.as_str()));
                Some(if negated { valence * NEGATION_SCALAR } else { valence })
            })
            .sum()
    }
}

impl PolarityScorer for LexiconPolarity {
    fn compound(&self, text: &str) -> f64 {
        let score = self.raw_score(text);
        if score == 0.0 {
            return 0.0;
        }
        (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

/// Labels text as positive, negative or neutral.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer<P = LexiconPolarity> {
    scorer: P,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PolarityScorer> SentimentAnalyzer<P> {
    pub fn with_scorer(scorer: P) -> Self {
        Self { scorer }
    }

    /// Empty text is neutral.
    pub fn classify(&self, text: &str) -> Sentiment {
        if text.is_empty() {
            return Sentiment::Neutral;
        }
        Sentiment::from_compound(self.scorer.compound(text))
    }
}
