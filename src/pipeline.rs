//! Per-article analysis: clean, summarize, label.

use serde::Serialize;
use tracing::{debug, info};

use crate::clean::clean_content;
use crate::news::{Article, ArticleSource, NewsError};
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::summarizer::{Summarizer, DEFAULT_MAX_SENTENCES};

/// Outcome for a single article
#[derive(Debug, Clone, Serialize)]
pub struct ArticleReport {
    /// 1-based position in the fetched list
    pub id: usize,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub sentiment: Sentiment,
}

/// Number of articles per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Analysis of every article fetched for a topic
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub topic: String,
    pub articles: Vec<ArticleReport>,
    pub counts: SentimentCounts,
}

impl Analysis {
    /// Summaries in article order
    pub fn summaries(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|a| a.summary.as_str())
    }
}

/// Summarizes and labels articles
#[derive(Debug, Clone)]
pub struct Analyzer {
    summarizer: Summarizer,
    sentiment: SentimentAnalyzer,
    max_sentences: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

impl Analyzer {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            summarizer: Summarizer::new(),
            sentiment: SentimentAnalyzer::new(),
            max_sentences,
        }
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Analyze a single article
    pub fn report(&self, id: usize, article: &Article) -> ArticleReport {
        let content = clean_content(article.body());
        let summary = self.summarizer.summarize(&content, self.max_sentences);
        let sentiment = self.sentiment.classify(&summary);
        debug!(id, %sentiment, chars = content.len(), "analyzed article");

        ArticleReport {
            id,
            title: article.headline().to_string(),
            url: article.url.clone(),
            summary,
            sentiment,
        }
    }

    /// Analyze a batch of articles for `topic`
    pub fn analyze(&self, topic: &str, articles: &[Article]) -> Analysis {
        let mut counts = SentimentCounts::default();
        let reports: Vec<ArticleReport> = articles
            .iter()
            .enumerate()
            .map(|(idx, article)| {
                let report = self.report(idx + 1, article);
                counts.record(report.sentiment);
                report
            })
            .collect();

        Analysis {
            topic: topic.to_string(),
            articles: reports,
            counts,
        }
    }
}

/// Fetch articles for `topic` and analyze them
pub async fn run<S>(source: &S, topic: &str, analyzer: &Analyzer) -> Result<Analysis, NewsError>
where
    S: ArticleSource + ?Sized,
{
    let articles = source.fetch(topic).await?;
    let analysis = analyzer.analyze(topic, &articles);
    info!(
        topic,
        positive = analysis.counts.positive,
        negative = analysis.counts.negative,
        neutral = analysis.counts.neutral,
        "analysis complete"
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::NO_CONTENT;
    use async_trait::async_trait;

    struct FixedSource(Vec<Article>);

    #[async_trait]
    impl ArticleSource for FixedSource {
        async fn fetch(&self, _topic: &str) -> Result<Vec<Article>, NewsError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ArticleSource for FailingSource {
        async fn fetch(&self, _topic: &str) -> Result<Vec<Article>, NewsError> {
            Err(NewsError::Api {
                code: "rateLimited".to_string(),
                message: "Too many requests".to_string(),
            })
        }
    }

    fn article(title: &str, content: Option<&str>) -> Article {
        Article {
            title: Some(title.to_string()),
            content: content.map(str::to_string),
            url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            ..Article::default()
        }
    }

    fn sample() -> Vec<Article> {
        vec![
            article(
                "Good news",
                Some("<p>Friends offer great support.</p> Support groups bring hope and support. [+900 chars]"),
            ),
            article("Bad news", Some("The crisis deepened. Victims of the crisis face pain.")),
            article("Quiet day", None),
        ]
    }

    #[test]
    fn test_report_cleans_and_summarizes() {
        let analyzer = Analyzer::new(1);
        let report = analyzer.report(1, &sample()[0]);

        assert_eq!(report.summary, "Support groups bring hope and support.");
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert_eq!(report.url, "https://example.com/good-news");
    }

    #[test]
    fn test_analyze_counts_and_ids() {
        let analysis = Analyzer::default().analyze("wellbeing", &sample());

        assert_eq!(analysis.topic, "wellbeing");
        assert_eq!(
            analysis.articles.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            analysis.counts,
            SentimentCounts {
                positive: 1,
                negative: 1,
                neutral: 1
            }
        );
        assert_eq!(analysis.counts.total(), 3);
        // Falls back to the title when there is no body
        assert_eq!(analysis.articles[2].summary, "Quiet day");
    }

    #[test]
    fn test_article_without_text_gets_sentinel() {
        let analysis = Analyzer::default().analyze("x", &[Article::default()]);

        assert_eq!(analysis.articles[0].summary, NO_CONTENT);
        assert_eq!(analysis.articles[0].title, "Untitled");
        assert_eq!(analysis.articles[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_counts_serialize_with_label_names() {
        let json = serde_json::to_value(SentimentCounts {
            positive: 2,
            negative: 1,
            neutral: 0,
        })
        .unwrap();

        assert_eq!(json["Positive"], 2);
        assert_eq!(json["Negative"], 1);
        assert_eq!(json["Neutral"], 0);
    }

    #[tokio::test]
    async fn test_run_with_source() {
        let source = FixedSource(sample());
        let analysis = run(&source, "mental health", &Analyzer::default()).await.unwrap();

        assert_eq!(analysis.articles.len(), 3);
        assert_eq!(analysis.summaries().count(), 3);
    }

    #[tokio::test]
    async fn test_run_propagates_source_errors() {
        let result = run(&FailingSource, "mental health", &Analyzer::default()).await;
        assert!(matches!(result, Err(NewsError::Api { .. })));
    }
}
