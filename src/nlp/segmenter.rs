//! Sentence segmentation.

use lazy_static::lazy_static;
use std::collections::HashSet;

use super::tokenizer::is_dotted_abbreviation;

/// Splits a document into sentences.
///
/// Implementations must be deterministic and return verbatim slices of the
/// input, in document order.
pub trait SentenceSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

lazy_static! {
    /// Lower-case abbreviations (without their final period) that don't end a sentence.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "gen", "gov", "sen",
        "rep", "rev", "col", "lt", "sgt", "capt", "cmdr", "hon", "vs", "etc", "inc", "ltd",
        "co", "corp", "dept", "univ", "vol", "fig", "approx", "jan", "feb", "mar", "apr",
        "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "tue", "thu", "fri",
    ]
    .into_iter()
    .collect();
}

/// Rule-based segmenter.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) followed by whitespace. A period does not end a sentence after
/// a known abbreviation, a single-letter initial or a dotted abbreviation
/// such as `U.S.`. An ellipsis followed by a lower-case word doesn't either.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    pub fn new() -> Self {
        Self
    }

    fn is_terminal(c: char) -> bool {
        matches!(c, '.' | '!' | '?' | '…')
    }

    fn is_closing(c: char) -> bool {
        matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
    }

    /// Decide whether the terminal `run` closes the sentence.
    ///
    /// `pending` is the text from the current sentence start up to the run and
    /// `following` is everything after it.
    fn ends_sentence(pending: &str, run: &str, following: &str) -> bool {
        let Some(next) = following.trim_start().chars().next() else {
            return true;
        };
        let run = run.trim_end_matches(Self::is_closing);

        // An ellipsis trails off mid-sentence when a lower-case word follows.
        if run != "." && run.chars().all(|c| c == '.' || c == '…') {
            return !next.is_lowercase();
        }
        if run != "." {
            return true;
        }

        let word = pending
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        if word.is_empty() {
            return true;
        }
        if is_dotted_abbreviation(&word) {
            return false;
        }
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                return false;
            }
        }

        !ABBREVIATIONS.contains(word.as_str())
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut iter = text.char_indices().peekable();

        while let Some((pos, c)) = iter.next() {
            if !Self::is_terminal(c) {
                continue;
            }

            let mut end = pos + c.len_utf8();
            while let Some(&(next_pos, next)) = iter.peek() {
                if Self::is_terminal(next) {
                    end = next_pos + next.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }
            while let Some(&(next_pos, next)) = iter.peek() {
                if Self::is_closing(next) {
                    end = next_pos + next.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }

            let following = &text[end..];
            if !following.is_empty() && !following.starts_with(char::is_whitespace) {
                continue;
            }

            if Self::ends_sentence(&text[start..pos], &text[pos..end], following) {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }
}
