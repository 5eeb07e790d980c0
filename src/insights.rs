//! Topic-level insights built from an [`Analysis`].
//!
//! Everything here is chart-ready data: sentiment counts, a per-article trend,
//! emotion tallies, word-cloud weights and a few wellbeing suggestions.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::emotion::{Emotion, EmotionLexicon, EmotionScores, Feeling};
use crate::pipeline::{Analysis, SentimentCounts};
use crate::summarizer::{Summarizer, NO_CONTENT};

const PROMPTS: &[&str] = &[
    "🧘 Take 5 minutes to do mindful breathing — inhale calm, exhale tension.",
    "🎧 Listen to your favorite song or nature sounds for a quick mental reset.",
    "📖 Read something inspiring — a poem, quote, or short story.",
    "☕ Hydrate and stretch — small actions make a big difference.",
    "💬 Talk to a friend or family member about something good that happened today.",
];

const QUOTES: &[&str] = &[
    "💭 'Peace comes from within. Do not seek it without.' – Buddha",
    "🌿 'You can’t stop the waves, but you can learn to surf.' – Jon Kabat-Zinn",
    "🌅 'In the middle of difficulty lies opportunity.' – Albert Einstein",
    "🕊 'Take rest; a field that has rested gives a bountiful crop.' – Ovid",
    "☀️ 'Almost everything will work again if you unplug it for a few minutes, including you.' – Anne Lamott",
];

/// Sentiment of one article on the trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub id: usize,
    pub value: i8,
}

/// Word-cloud entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermWeight {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub topic: String,
    pub counts: SentimentCounts,
    pub trend: Vec<TrendPoint>,
    pub emotions: EmotionScores,
    /// Strongest emotion or affect; drives the mood suggestion
    pub dominant_emotion: Option<Feeling>,
    pub word_cloud: Vec<TermWeight>,
    pub suggestions: Vec<String>,
}

impl Insights {
    /// Build the report for an analysis.
    ///
    /// `cloud_terms` caps the word cloud; `rng` picks the prompt and quote.
    pub fn build<R: Rng + ?Sized>(
        analysis: &Analysis,
        summarizer: &Summarizer,
        lexicon: &EmotionLexicon,
        cloud_terms: usize,
        rng: &mut R,
    ) -> Self {
        let text = analysis
            .summaries()
            .filter(|s| *s != NO_CONTENT)
            .collect::<Vec<_>>()
            .join(" ");

        let trend = analysis
            .articles
            .iter()
            .map(|a| TrendPoint {
                id: a.id,
                value: a.sentiment.trend_value(),
            })
            .collect();

        let emotions = lexicon.score(&text);
        let dominant_emotion = emotions.dominant();

        let word_cloud = summarizer
            .frequencies(&text)
            .top(cloud_terms)
            .into_iter()
            .map(|(term, count)| TermWeight {
                term: term.to_string(),
                count,
            })
            .collect();

        let mut suggestions = vec![mood_suggestion(&analysis.counts, dominant_emotion).to_string()];
        suggestions.extend(PROMPTS.choose(rng).map(|s| s.to_string()));
        suggestions.extend(QUOTES.choose(rng).map(|s| s.to_string()));

        Self {
            topic: analysis.topic.clone(),
            counts: analysis.counts,
            trend,
            emotions,
            dominant_emotion,
            word_cloud,
            suggestions,
        }
    }
}

/// Advice matching the overall tone and the strongest feeling
pub fn mood_suggestion(counts: &SentimentCounts, dominant: Option<Feeling>) -> &'static str {
    use std::cmp::Ordering;

    match counts.negative.cmp(&counts.positive) {
        Ordering::Greater => match dominant {
            Some(Feeling::Emotion(Emotion::Fear | Emotion::Sadness | Emotion::Anger)) => {
                "🕊 It seems the recent news carries heavy emotions like fear or sadness. Take short breaks from screens."
            }
            Some(Feeling::Emotion(Emotion::Disgust)) => {
                "⚠️ Some stories may trigger discomfort. Consider journaling or talking about your thoughts."
            }
            _ => "☁️ A wave of negativity can weigh you down. Try spending time outdoors or doing a quick mindfulness exercise.",
        },
        Ordering::Less => match dominant {
            Some(Feeling::Emotion(Emotion::Joy)) => {
                "🌞 A lot of joyful energy! Celebrate small wins and spread that positivity to others today."
            }
            Some(Feeling::Emotion(Emotion::Trust)) => {
                "💬 The tone feels uplifting and trustworthy — a great time to reflect or share something kind online."
            }
            _ => "✨ The news seems mostly positive. Stay engaged but balanced with relaxing breaks.",
        },
        Ordering::Equal => {
            "📊 The tone is mostly neutral. Try exploring diverse perspectives to stay informed without feeling overwhelmed."
        }
    }
}
