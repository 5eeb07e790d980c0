//! Natural language building blocks
//!
//! Sentence segmentation, word tokenization and stop words used by the
//! summarizer and the mood analyzers.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use segmenter::{RuleSegmenter, SentenceSegmenter};
pub use stopwords::StopWords;
pub use tokenizer::{TreebankTokenizer, WordTokenizer};
