//! # newsbrief
//!
//! Fetch news for a topic, boil each article down to its key sentences and
//! gauge the mood of the coverage.
//!
//! ## Features
//!
//! - **Extractive summaries**: frequency-scored sentence selection with pluggable segmentation and tokenization
//! - **Mood**: lexicon sentiment labels and emotion tallies per topic
//! - **Insights**: chart-ready counts, trend, word-cloud weights and wellbeing suggestions

pub mod clean;
pub mod config;
pub mod emotion;
pub mod insights;
pub mod logging;
pub mod news;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod summarizer;

pub use config::Config;
pub use insights::Insights;
pub use news::{Article, ArticleSource, NewsClient};
pub use pipeline::{Analysis, Analyzer};
pub use sentiment::Sentiment;
pub use summarizer::{summarize, Summarizer, NO_CONTENT};
