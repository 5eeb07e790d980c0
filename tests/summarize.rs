use newsbrief::nlp::{RuleSegmenter, SentenceSegmenter};
use newsbrief::{summarize, Summarizer, NO_CONTENT};

const ARTICLE: &str = "Demand for therapy has grown sharply since 2020. \
Clinics in rural areas report long waiting lists for therapy. \
Some patients wait months. \
Experts say online therapy can shorten waiting lists. \
The weather was mild on Tuesday. \
Funding for rural clinics remains uncertain.";

fn sentences(text: &str) -> Vec<&str> {
    RuleSegmenter::new().segment(text)
}

#[test]
fn test_summary_is_made_of_source_sentences() {
    let source = sentences(ARTICLE);
    for k in 0..8 {
        let selected = Summarizer::new().select(ARTICLE, k);
        assert!(selected.len() <= k);
        assert!(selected.iter().all(|s| source.contains(&s.text)));

        let joined: Vec<&str> = selected.iter().map(|s| s.text).collect();
        assert_eq!(summarize(ARTICLE, k), joined.join(" "));
    }
}

#[test]
fn test_no_duplicates_and_descending_scores() {
    let selected = Summarizer::new().select(ARTICLE, 10);
    let mut texts: Vec<&str> = selected.iter().map(|s| s.text).collect();

    assert!(selected.windows(2).all(|w| w[0].score >= w[1].score));
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), selected.len());
}

#[test]
fn test_deterministic() {
    assert_eq!(summarize(ARTICLE, 3), summarize(ARTICLE, 3));
}

#[test]
fn test_growing_k_only_appends() {
    let mut previous = String::new();
    for k in 1..7 {
        let current = summarize(ARTICLE, k);
        assert!(current.starts_with(&previous));
        previous = current;
    }
}

#[test]
fn test_large_k_returns_all_scored_sentences() {
    let all = Summarizer::new().select(ARTICLE, 100);
    assert_eq!(all.len(), sentences(ARTICLE).len());
}

#[test]
fn test_best_sentence() {
    // therapy=3 waiting=2 lists=2 rural=2 clinics=2
    assert_eq!(
        summarize(ARTICLE, 1),
        "Clinics in rural areas report long waiting lists for therapy."
    );
}

#[test]
fn test_boundaries() {
    assert_eq!(summarize("", 2), NO_CONTENT);
    assert_eq!(summarize("Only the and a.", 2), "");
    assert_eq!(summarize("?!", 2), "");
}
