//! newsbrief CLI - news summaries and mood by topic
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use newsbrief::emotion::{Affect, EmotionLexicon};
use newsbrief::logging::init_logging;
use newsbrief::{pipeline, Analysis, Analyzer, Config, Insights, NewsClient, Sentiment};
use std::io::Read;
use std::path::PathBuf;

/// Topic used when none is given
const DEFAULT_TOPIC: &str = "mental health";

#[derive(Parser)]
#[command(name = "newsbrief")]
#[command(author, version, about = "News summaries and mood by topic", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text from a file or stdin
    Summarize {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
        /// Number of sentences to keep
        #[arg(short = 'n', long)]
        sentences: Option<usize>,
    },
    /// Fetch, summarise and label articles for a topic
    Fetch {
        /// Search topic
        #[arg(default_value = DEFAULT_TOPIC)]
        topic: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fetch articles and report sentiment, emotions and suggestions
    Insights {
        /// Search topic
        #[arg(default_value = DEFAULT_TOPIC)]
        topic: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli
        .command
        .unwrap_or_else(|| Commands::Fetch { topic: DEFAULT_TOPIC.to_string(), json: false })
    {
        Commands::Summarize { file, sentences } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let max_sentences = sentences.unwrap_or(config.summary.max_sentences);
            println!("{}", newsbrief::summarize(text.trim(), max_sentences));
        }
        Commands::Fetch { topic, json } => {
            let analysis = fetch(&config, &topic).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
        Commands::Insights { topic, json } => {
            let analysis = fetch(&config, &topic).await?;
            let analyzer = Analyzer::new(config.summary.max_sentences);
            let insights = Insights::build(
                &analysis,
                analyzer.summarizer(),
                &EmotionLexicon::new(),
                config.insights.cloud_terms,
                &mut rand::thread_rng(),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&insights)?);
            } else {
                print_insights(&insights);
            }
        }
    }

    Ok(())
}

async fn fetch(config: &Config, topic: &str) -> anyhow::Result<Analysis> {
    let client = NewsClient::new(config)?;
    let analyzer = Analyzer::new(config.summary.max_sentences);
    let analysis = pipeline::run(&client, topic, &analyzer).await?;
    Ok(analysis)
}

fn label(sentiment: Sentiment) -> ColoredString {
    let text = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => text.green(),
        Sentiment::Negative => text.red(),
        Sentiment::Neutral => text.bright_black(),
    }
}

fn print_analysis(analysis: &Analysis) {
    if analysis.articles.is_empty() {
        println!("No articles found for: {}", analysis.topic);
        return;
    }

    println!("News for '{}':\n", analysis.topic);
    for article in &analysis.articles {
        println!("{}. {} [{}]", article.id, article.title.bold(), label(article.sentiment));
        println!("   {}", article.url);
        println!("   {}\n", article.summary);
    }
}

fn print_insights(insights: &Insights) {
    println!("=== Insights: {} ===\n", insights.topic);

    let counts = &insights.counts;
    println!(
        "Sentiment: {} {}  {} {}  {} {}",
        label(Sentiment::Positive),
        counts.positive,
        label(Sentiment::Negative),
        counts.negative,
        label(Sentiment::Neutral),
        counts.neutral
    );

    let trend: Vec<String> = insights.trend.iter().map(|p| format!("{:+}", p.value)).collect();
    println!("Trend:     {}", trend.join(" "));

    println!("\nEmotions:");
    for (emotion, count) in insights.emotions.iter() {
        println!("  {:<13} {:>3} {}", emotion.as_str(), count, "#".repeat(count));
    }
    println!(
        "  affect: positive {}  negative {}",
        insights.emotions.affect(Affect::Positive),
        insights.emotions.affect(Affect::Negative)
    );
    if let Some(dominant) = insights.dominant_emotion {
        println!("  dominant: {}", dominant.to_string().bold());
    }

    if !insights.word_cloud.is_empty() {
        let terms: Vec<String> = insights
            .word_cloud
            .iter()
            .map(|t| format!("{} ({})", t.term, t.count))
            .collect();
        println!("\nTop terms: {}", terms.join(", "));
    }

    println!("\nSuggestions:");
    for suggestion in &insights.suggestions {
        println!("  • {}", suggestion);
    }
}
