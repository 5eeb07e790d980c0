//! Frequency-based extractive summarizer.
//!
//! Sentences are scored by summing the document-wide frequency of every
//! qualifying word they contain, then the best ones are returned
//! highest-scoring first.

use crate::nlp::stopwords::{StopWords, ENGLISH};
use crate::nlp::tokenizer::is_alphanumeric;
use crate::nlp::{RuleSegmenter, SentenceSegmenter, TreebankTokenizer, WordTokenizer};
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;

/// Returned when there is no text to summarize.
pub const NO_CONTENT: &str = "No content to summarize.";

/// Sentences kept when the caller has no preference.
pub const DEFAULT_MAX_SENTENCES: usize = 2;

lazy_static! {
    static ref DEFAULT_SUMMARIZER: Summarizer = Summarizer::new();
}

/// Summarize `text` with the default segmenter, tokenizer and English stop words.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    DEFAULT_SUMMARIZER.summarize(text, max_sentences)
}

/// Occurrence counts of qualifying tokens across a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent tokens, most frequent first; ties are alphabetical.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    fn record(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }
}

/// A sentence of the document and its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'t> {
    pub text: &'t str,
    pub score: usize,
}

/// Extractive summarizer with pluggable segmentation and tokenization.
#[derive(Debug, Clone)]
pub struct Summarizer<S = RuleSegmenter, T = TreebankTokenizer> {
    segmenter: S,
    tokenizer: T,
    stop_words: Cow<'static, StopWords>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer using the rule-based segmenter, the treebank
    /// tokenizer and the shared English stop words.
    pub fn new() -> Self {
        Self::with_capabilities(RuleSegmenter, TreebankTokenizer)
    }
}

impl<S: SentenceSegmenter, T: WordTokenizer> Summarizer<S, T> {
    pub fn with_capabilities(segmenter: S, tokenizer: T) -> Self {
        Self {
            segmenter,
            tokenizer,
            stop_words: Cow::Borrowed(&*ENGLISH),
        }
    }

    /// Replace the stop-word set.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Cow::Owned(stop_words);
        self
    }

    /// Count alphanumeric, non-stop-word tokens of the case-folded text.
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        for token in self.tokenizer.tokenize(&text.to_lowercase()) {
            if is_alphanumeric(&token) && !self.stop_words.contains(&token) {
                table.record(token);
            }
        }
        table
    }

    /// Score every sentence that contains at least one token of `table`.
    ///
    /// Sentence tokens are not filtered again: any token that is a key of the
    /// table counts, once per occurrence. Identical sentences share one entry
    /// and accumulate. The result is in order of first appearance.
    pub fn score_sentences<'t>(&self, text: &'t str, table: &FrequencyTable) -> Vec<ScoredSentence<'t>> {
        let mut scored: Vec<ScoredSentence<'t>> = Vec::new();
        let mut index: HashMap<&'t str, usize> = HashMap::new();

        for sentence in self.segmenter.segment(text) {
            for token in self.tokenizer.tokenize(&sentence.to_lowercase()) {
                let Some(count) = table.get(&token) else {
                    continue;
                };
                match index.get(sentence) {
                    Some(&slot) => scored[slot].score += count,
                    None => {
                        index.insert(sentence, scored.len());
                        scored.push(ScoredSentence {
                            text: sentence,
                            score: count,
                        });
                    }
                }
            }
        }

        scored
    }

    /// Pick up to `max_sentences` sentences, highest score first.
    ///
    /// Ties keep the order in which the sentences first appear.
    pub fn select<'t>(&self, text: &'t str, max_sentences: usize) -> Vec<ScoredSentence<'t>> {
        let table = self.frequencies(text);
        let mut scored = self.score_sentences(text, &table);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(max_sentences);
        scored
    }

    /// Summarize `text` into at most `max_sentences` sentences joined by a space.
    ///
    /// Empty input yields [`NO_CONTENT`]; text without any qualifying word
    /// yields an empty string.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        if text.is_empty() {
            return NO_CONTENT.to_string();
        }

        self.select(text, max_sentences)
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: &str =
        "Cats are great pets. Dogs are loyal companions. Cats and dogs can be friends.";

    /// Naive reference scoring: whitespace words with edge punctuation removed.
    fn reference_scores(text: &str) -> Vec<(String, usize)> {
        let words = |s: &str| -> Vec<String> {
            s.split_whitespace()
                .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let mut freq: HashMap<String, usize> = HashMap::new();
        for w in words(text) {
            if !ENGLISH.contains(&w) {
                *freq.entry(w).or_insert(0) += 1;
            }
        }
        RuleSegmenter
            .segment(text)
            .into_iter()
            .map(|s| {
                let score: usize = words(s).iter().filter_map(|w| freq.get(w)).sum();
                (s.to_string(), score)
            })
            .collect()
    }

    #[test]
    fn test_pets_winner_matches_reference_scoring() {
        let reference = reference_scores(PETS);
        // cats=2 dogs=2 great=pets=loyal=companions=friends=1
        assert_eq!(
            reference.iter().map(|(_, s)| *s).collect::<Vec<_>>(),
            vec![4, 4, 5]
        );
        let best = reference.iter().max_by_key(|(_, s)| *s).unwrap();

        assert_eq!(summarize(PETS, 1), best.0);
        assert_eq!(summarize(PETS, 1), "Cats and dogs can be friends.");
    }

    #[test]
    fn test_ties_keep_document_order() {
        assert_eq!(
            summarize(PETS, 3),
            "Cats and dogs can be friends. Cats are great pets. Dogs are loyal companions."
        );
    }

    #[test]
    fn test_frequency_table() {
        let table = Summarizer::new().frequencies(PETS);

        assert_eq!(table.get("cats"), Some(2));
        assert_eq!(table.get("dogs"), Some(2));
        assert_eq!(table.get("friends"), Some(1));
        assert_eq!(table.get("are"), None);
        assert_eq!(table.get("."), None);
        assert_eq!(table.len(), 7);
        assert_eq!(table.top(2), vec![("cats", 2), ("dogs", 2)]);
    }

    #[test]
    fn test_empty_text_returns_sentinel() {
        assert_eq!(summarize("", 2), NO_CONTENT);
    }

    #[test]
    fn test_only_stop_words_returns_empty() {
        assert_eq!(summarize("Only the and a.", 2), "");
        assert_eq!(summarize("   ", 2), "");
        assert_eq!(summarize("... !!! ???", 2), "");
    }

    #[test]
    fn test_zero_sentences() {
        assert_eq!(summarize(PETS, 0), "");
    }

    #[test]
    fn test_unscored_sentences_are_never_selected() {
        let text = "Solar power is growing fast. It is what it is. Solar farms need power lines.";
        let selected = Summarizer::new().select(text, 10);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|s| s.text != "It is what it is."));
    }

    #[test]
    fn test_repeated_tokens_count_per_occurrence() {
        let text = "Rain rain rain today. Sun and rain tomorrow.";
        let summarizer = Summarizer::new();
        let table = summarizer.frequencies(text);
        let scored = summarizer.score_sentences(text, &table);

        // rain=4 today=1 sun=1 tomorrow=1
        assert_eq!(scored[0].score, 4 * 3 + 1);
        assert_eq!(scored[1].score, 1 + 4 + 1);
    }

    #[test]
    fn test_duplicate_sentences_collapse() {
        let text = "Big news. Big news. Other story here.";
        let summarizer = Summarizer::new();
        let table = summarizer.frequencies(text);
        let scored = summarizer.score_sentences(text, &table);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0], ScoredSentence { text: "Big news.", score: 8 });
        assert_eq!(summarize(text, 3), "Big news. Other story here.");
    }

    #[test]
    fn test_custom_stop_words() {
        let summarizer = Summarizer::new().with_stop_words(StopWords::from_list(&["cats", "dogs"]));
        let table = summarizer.frequencies(PETS);

        assert_eq!(table.get("cats"), None);
        assert_eq!(table.get("are"), Some(2));
    }

    struct LineSegmenter;

    impl SentenceSegmenter for LineSegmenter {
        fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
            text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
        }
    }

    #[test]
    fn test_pluggable_segmenter() {
        let summarizer = Summarizer::with_capabilities(LineSegmenter, TreebankTokenizer);
        let text = "markets rally\nmarkets and bonds rally again\nquiet day";

        assert_eq!(summarizer.summarize(text, 1), "markets and bonds rally again");
    }

    #[test]
    fn test_sentence_after_trailing_number_is_separate() {
        let text =
            "Unemployment rose to 4.2. Markets fell sharply on the news. Unemployment worries grow.";

        // unemployment=2, every other qualifying word once
        assert_eq!(summarize(text, 1), "Markets fell sharply on the news.");
    }

    #[test]
    fn test_percent_and_currency_amounts_count() {
        let table = Summarizer::new().frequencies("Prices rose 50% to $100. Wages rose 50%.");

        assert_eq!(table.get("50"), Some(2));
        assert_eq!(table.get("100"), Some(1));
        assert_eq!(table.get("%"), None);
    }

    /// Splits on whitespace only, so punctuation stays attached to words.
    struct WhitespaceTokenizer;

    impl WordTokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(String::from).collect()
        }
    }

    #[test]
    fn test_pluggable_tokenizer() {
        let summarizer = Summarizer::with_capabilities(RuleSegmenter, WhitespaceTokenizer);
        let table = summarizer.frequencies(PETS);

        // "pets." and "friends." keep their period and never qualify
        assert_eq!(table.get("pets"), None);
        assert_eq!(table.get("friends"), None);
        assert_eq!(table.get("cats"), Some(2));
        assert_eq!(table.len(), 4);
        assert_eq!(summarizer.summarize(PETS, 1), "Cats and dogs can be friends.");
    }
}
