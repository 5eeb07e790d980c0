//! Emotion tallies over the eight basic emotion categories.
//!
//! Words also carry a positive or negative affect. Affect is counted next to
//! the emotions and competes with them for the dominant feeling, but charts
//! only show the eight categories.

use lazy_static::lazy_static;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::nlp::{TreebankTokenizer, WordTokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Fear,
    Anger,
    Trust,
    Disgust,
    Anticipation,
    Surprise,
}

impl Emotion {
    /// All categories in reporting order
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Trust,
        Emotion::Disgust,
        Emotion::Anticipation,
        Emotion::Surprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Trust => "trust",
            Emotion::Disgust => "disgust",
            Emotion::Anticipation => "anticipation",
            Emotion::Surprise => "surprise",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive or negative word association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affect {
    Positive,
    Negative,
}

impl Affect {
    pub fn as_str(self) -> &'static str {
        match self {
            Affect::Positive => "positive",
            Affect::Negative => "negative",
        }
    }
}

impl fmt::Display for Affect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any key of the tally: an emotion category or an affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum Feeling {
    Emotion(Emotion),
    Affect(Affect),
}

impl Feeling {
    const COUNT: usize = 10;

    pub fn as_str(self) -> &'static str {
        match self {
            Feeling::Emotion(emotion) => emotion.as_str(),
            Feeling::Affect(affect) => affect.as_str(),
        }
    }

    fn index(self) -> usize {
        match self {
            Feeling::Emotion(emotion) => emotion.index(),
            Feeling::Affect(Affect::Positive) => 8,
            Feeling::Affect(Affect::Negative) => 9,
        }
    }

    fn all() -> impl Iterator<Item = Feeling> {
        Emotion::ALL
            .into_iter()
            .map(Feeling::Emotion)
            .chain([Affect::Positive, Affect::Negative].map(Feeling::Affect))
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Emotion::*;

lazy_static! {
    static ref NRC_WORDS: HashMap<&'static str, &'static [Emotion]> = {
        let entries: &[(&'static str, &'static [Emotion])] = &[
            ("abandon", &[Fear, Sadness]),
            ("abuse", &[Anger, Disgust, Fear, Sadness]),
            ("accident", &[Fear, Sadness, Surprise]),
            ("afraid", &[Fear]),
            ("alarm", &[Fear, Surprise]),
            ("anger", &[Anger]),
            ("angry", &[Anger, Disgust]),
            ("anxiety", &[Anger, Anticipation, Fear, Sadness]),
            ("attack", &[Anger, Fear]),
            ("awful", &[Anger, Disgust, Fear, Sadness]),
            ("bad", &[Anger, Disgust, Fear, Sadness]),
            ("calm", &[Trust]),
            ("care", &[Trust]),
            ("celebrate", &[Anticipation, Joy, Surprise, Trust]),
            ("celebration", &[Anticipation, Joy, Surprise, Trust]),
            ("cheer", &[Anticipation, Joy, Surprise, Trust]),
            ("confidence", &[Joy, Trust]),
            ("crisis", &[Fear, Sadness]),
            ("danger", &[Fear, Sadness]),
            ("dead", &[Anger, Disgust, Fear, Sadness, Surprise]),
            ("death", &[Anger, Anticipation, Disgust, Fear, Sadness, Surprise]),
            ("depression", &[Sadness]),
            ("despair", &[Anger, Disgust, Fear, Sadness]),
            ("disaster", &[Anger, Disgust, Fear, Sadness, Surprise]),
            ("disease", &[Anger, Disgust, Fear, Sadness]),
            ("disgust", &[Anger, Disgust, Fear, Sadness]),
            ("doctor", &[Trust]),
            ("eager", &[Anticipation, Joy, Trust]),
            ("expect", &[Anticipation, Surprise, Trust]),
            ("fear", &[Anger, Fear]),
            ("fight", &[Anger, Fear]),
            ("friend", &[Joy, Trust]),
            ("friendly", &[Anticipation, Joy, Trust]),
            ("fun", &[Anticipation, Joy]),
            ("good", &[Anticipation, Joy, Surprise, Trust]),
            ("grief", &[Sadness]),
            ("happy", &[Anticipation, Joy, Trust]),
            ("hate", &[Anger, Disgust, Fear, Sadness]),
            ("health", &[Joy, Trust]),
            ("healthy", &[Joy, Trust]),
            ("help", &[Trust]),
            ("hope", &[Anticipation, Joy, Surprise, Trust]),
            ("hopeful", &[Anticipation, Joy, Surprise, Trust]),
            ("horrible", &[Anger, Disgust, Fear]),
            ("hurt", &[Anger, Fear, Sadness]),
            ("illness", &[Fear, Sadness]),
            ("joy", &[Joy, Trust]),
            ("kill", &[Fear, Sadness]),
            ("lonely", &[Anger, Disgust, Fear, Sadness]),
            ("loss", &[Anger, Fear, Sadness]),
            ("love", &[Joy]),
            ("loyal", &[Fear, Joy, Trust]),
            ("money", &[Anger, Anticipation, Joy, Surprise, Trust]),
            ("pain", &[Fear, Sadness]),
            ("panic", &[Fear]),
            ("peace", &[Anticipation, Joy, Trust]),
            ("plan", &[Anticipation]),
            ("prepared", &[Anticipation, Trust]),
            ("proud", &[Anticipation, Joy, Trust]),
            ("rage", &[Anger]),
            ("recovery", &[Anticipation, Joy, Trust]),
            ("relief", &[Joy, Trust]),
            ("risk", &[Anticipation, Fear]),
            ("sad", &[Sadness]),
            ("safe", &[Joy, Trust]),
            ("scared", &[Fear]),
            ("shock", &[Anger, Fear, Surprise]),
            ("sick", &[Disgust, Sadness]),
            ("stress", &[Anger, Disgust, Fear, Sadness]),
            ("struggle", &[Anger, Fear, Sadness]),
            ("success", &[Anticipation, Joy, Trust]),
            ("sudden", &[Surprise]),
            ("suicide", &[Anger, Fear, Sadness]),
            ("support", &[Joy, Trust]),
            ("surprise", &[Fear, Joy, Surprise]),
            ("teacher", &[Trust]),
            ("terrible", &[Anger, Disgust, Fear, Sadness]),
            ("therapy", &[Anticipation, Trust]),
            ("threat", &[Anger, Fear]),
            ("tragedy", &[Fear, Sadness]),
            ("trust", &[Trust]),
            ("victim", &[Anger, Fear, Sadness]),
            ("unexpected", &[Anticipation, Fear, Joy, Surprise]),
            ("violence", &[Anger, Fear, Sadness]),
            ("vomit", &[Disgust]),
            ("war", &[Fear]),
            ("wait", &[Anticipation]),
            ("win", &[Anticipation, Joy, Surprise, Trust]),
            ("worry", &[Anticipation, Fear, Sadness]),
        ];
        entries.iter().copied().collect()
    };

    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "abandon", "abuse", "accident", "afraid", "alarm", "anger", "angry", "anxiety", "attack",
        "awful", "bad", "crisis", "danger", "dead", "death", "decline", "depression", "despair",
        "disaster", "disease", "disgust", "failure", "fear", "fight", "grief", "hate", "horrible",
        "hurt", "illness", "kill", "lonely", "loss", "pain", "panic", "poverty", "problem", "rage",
        "risk", "sad", "scared", "shock", "shortage", "sick", "stress", "struggle", "suicide",
        "terrible", "threat", "tragedy", "unexpected", "victim", "violence", "vomit", "war", "worry",
    ]
    .into_iter()
    .collect();

    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "benefit", "calm", "care", "celebrate", "celebration", "cheer", "confidence", "doctor",
        "eager", "expect", "friend", "friendly", "fun", "good", "happy", "health", "healthy",
        "help", "hope", "hopeful", "improve", "joy", "kindness", "love", "loyal", "money", "peace",
        "prepared", "progress", "proud", "recovery", "relief", "safe", "success", "support",
        "surprise", "teacher", "therapy", "trust", "unexpected", "win",
    ]
    .into_iter()
    .collect();
}

/// Raw occurrence counts per emotion category and affect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionScores {
    counts: [usize; Feeling::COUNT],
    /// Order in which each key was first counted
    first_seen: [Option<usize>; Feeling::COUNT],
    seen: usize,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> usize {
        self.counts[emotion.index()]
    }

    pub fn affect(&self, affect: Affect) -> usize {
        self.counts[Feeling::Affect(affect).index()]
    }

    /// Category counts in [`Emotion::ALL`] order
    pub fn values(&self) -> [usize; 8] {
        let mut values = [0; 8];
        values.copy_from_slice(&self.counts[..8]);
        values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.get(e)))
    }

    /// Sum over the eight categories
    pub fn total(&self) -> usize {
        self.counts[..8].iter().sum()
    }

    /// The most frequent key, affect included.
    ///
    /// Ties go to the key counted first. `None` when nothing matched.
    pub fn dominant(&self) -> Option<Feeling> {
        Feeling::all()
            .filter(|f| self.counts[f.index()] > 0)
            .min_by_key(|f| (Reverse(self.counts[f.index()]), self.first_seen[f.index()]))
    }

    fn add(&mut self, feeling: Feeling) {
        let i = feeling.index();
        if self.first_seen[i].is_none() {
            self.first_seen[i] = Some(self.seen);
            self.seen += 1;
        }
        self.counts[i] += 1;
    }
}

impl Serialize for EmotionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Emotion::ALL.len()))?;
        for (emotion, count) in self.iter() {
            map.serialize_entry(emotion.as_str(), &count)?;
        }
        map.end()
    }
}

/// Word-to-emotion lexicon
#[derive(Debug, Clone, Default)]
pub struct EmotionLexicon {
    tokenizer: TreebankTokenizer,
}

impl EmotionLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emotions associated with a lower-case word
    pub fn lookup(&self, word: &str) -> &'static [Emotion] {
        NRC_WORDS.get(word).copied().unwrap_or(&[])
    }

    /// Affects of a lower-case word; a word can carry both
    pub fn affects(&self, word: &str) -> impl Iterator<Item = Affect> {
        let negative = NEGATIVE_WORDS.contains(word).then_some(Affect::Negative);
        let positive = POSITIVE_WORDS.contains(word).then_some(Affect::Positive);
        negative.into_iter().chain(positive)
    }

    /// Tally every emotion and affect association of every word in `text`.
    ///
    /// Each word's keys are counted in alphabetical order, so ties in
    /// [`EmotionScores::dominant`] follow the text.
    pub fn score(&self, text: &str) -> EmotionScores {
        let mut scores = EmotionScores::default();
        for token in self.tokenizer.tokenize(&text.to_lowercase()) {
            let emotions = self.lookup(&token);
            let split = emotions.partition_point(|e| e.as_str() < "negative");

            for &emotion in &emotions[..split] {
                scores.add(Feeling::Emotion(emotion));
            }
            for affect in self.affects(&token) {
                scores.add(Feeling::Affect(affect));
            }
            for &emotion in &emotions[split..] {
                scores.add(Feeling::Emotion(emotion));
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_every_association() {
        let scores = EmotionLexicon::new().score("Fear and panic, then relief.");

        assert_eq!(scores.get(Emotion::Fear), 2);
        assert_eq!(scores.get(Emotion::Anger), 1);
        assert_eq!(scores.get(Emotion::Joy), 1);
        assert_eq!(scores.get(Emotion::Trust), 1);
        assert_eq!(scores.get(Emotion::Surprise), 0);
        assert_eq!(scores.affect(Affect::Negative), 2);
        assert_eq!(scores.affect(Affect::Positive), 1);
        assert_eq!(scores.total(), 5);
        // fear and negative tie; fear is counted first
        assert_eq!(scores.dominant(), Some(Feeling::Emotion(Emotion::Fear)));
    }

    #[test]
    fn test_dominant_tie_follows_text_order() {
        let lexicon = EmotionLexicon::new();

        assert_eq!(
            lexicon.score("sudden plan").dominant(),
            Some(Feeling::Emotion(Emotion::Surprise))
        );
        assert_eq!(
            lexicon.score("plan sudden").dominant(),
            Some(Feeling::Emotion(Emotion::Anticipation))
        );
    }

    #[test]
    fn test_affect_can_outrank_emotions() {
        let scores =
            EmotionLexicon::new().score("Funding cuts deepen the crisis. Clinics face shortage and decline.");

        assert_eq!(scores.get(Emotion::Fear), 1);
        assert_eq!(scores.affect(Affect::Negative), 3);
        assert_eq!(scores.dominant(), Some(Feeling::Affect(Affect::Negative)));
    }

    #[test]
    fn test_word_with_both_affects() {
        let lexicon = EmotionLexicon::new();

        assert_eq!(
            lexicon.affects("unexpected").collect::<Vec<_>>(),
            vec![Affect::Negative, Affect::Positive]
        );
        assert_eq!(lexicon.affects("plan").count(), 0);
    }

    #[test]
    fn test_lexicon_entries_are_alphabetical() {
        for (word, emotions) in NRC_WORDS.iter() {
            assert!(
                emotions.windows(2).all(|w| w[0].as_str() < w[1].as_str()),
                "emotions of {word} out of order"
            );
        }
    }

    #[test]
    fn test_no_matches() {
        let scores = EmotionLexicon::new().score("The committee met on Tuesday.");

        assert_eq!(scores.total(), 0);
        assert_eq!(scores.dominant(), None);
        assert_eq!(scores.values(), [0; 8]);
    }

    #[test]
    fn test_serializes_all_categories() {
        let scores = EmotionLexicon::new().score("joy");
        let json = serde_json::to_value(scores).unwrap();

        assert_eq!(json["joy"], 1);
        assert_eq!(json["trust"], 1);
        assert_eq!(json["surprise"], 0);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
