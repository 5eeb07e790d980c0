//! Word tokenization.

/// Splits text into word and punctuation tokens.
pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// English clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &[
    "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'s", "’s", "'d", "’d", "'m", "’m",
];

/// Treebank-style tokenizer.
///
/// Splits on whitespace, then peels leading and trailing punctuation into
/// tokens of their own and splits English clitics (`don't` becomes `do` and
/// `n't`). Internal punctuation is left alone, so `3.5`, `u.s.` and
/// `well-known` stay whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn is_leading(c: char) -> bool {
        matches!(c, '"' | '\'' | '`' | '(' | '[' | '{' | '“' | '‘' | '«' | '$' | '#' | '£' | '€')
    }

    fn is_trailing(c: char) -> bool {
        matches!(
            c,
            '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»' | '…' | '%'
        )
    }

    /// A trailing period belongs to dotted abbreviations like `u.s.`
    fn keeps_period(word: &str) -> bool {
        word.strip_suffix('.').is_some_and(is_dotted_abbreviation)
    }

    /// First `--` or em dash in `chunk`, with its byte offset.
    fn find_dash(chunk: &str) -> Option<(usize, &'static str)> {
        let double = chunk.find("--").map(|at| (at, "--"));
        let em = chunk.find('—').map(|at| (at, "—"));
        match (double, em) {
            (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    fn split_clitic(word: &str) -> (&str, Option<&str>) {
        for clitic in CLITICS {
            if word.len() > clitic.len() {
                let at = word.len() - clitic.len();
                if word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(clitic) {
                    return (&word[..at], Some(&word[at..]));
                }
            }
        }
        (word, None)
    }

    fn push_chunk(chunk: &str, tokens: &mut Vec<String>) {
        let mut rest = chunk;

        while let Some(c) = rest.chars().next() {
            if !Self::is_leading(c) {
                break;
            }
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        while let Some(c) = rest.chars().next_back() {
            if !Self::is_trailing(c) || (c == '.' && Self::keeps_period(rest)) {
                break;
            }
            trailing.push(c);
            rest = &rest[..rest.len() - c.len_utf8()];
        }

        if !rest.is_empty() {
            match Self::split_clitic(rest) {
                (stem, Some(clitic)) => {
                    tokens.push(stem.to_string());
                    tokens.push(clitic.to_string());
                }
                (word, None) => tokens.push(word.to_string()),
            }
        }

        tokens.extend(trailing.into_iter().rev().map(String::from));
    }
}

impl WordTokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let mut rest = chunk;
            while let Some((at, dash)) = Self::find_dash(rest) {
                Self::push_chunk(&rest[..at], &mut tokens);
                tokens.push(dash.to_string());
                rest = &rest[at + dash.len()..];
            }
            Self::push_chunk(rest, &mut tokens);
        }
        tokens
    }
}

/// True for dotted abbreviations such as `u.s` or `e.g` (final period removed).
///
/// The last dot-separated piece must be one or two letters, so decimals
/// (`4.2`) and domain names (`example.com`) don't qualify.
pub fn is_dotted_abbreviation(word: &str) -> bool {
    match word.rsplit_once('.') {
        Some((head, last)) => {
            !head.is_empty()
                && (1..=2).contains(&last.chars().count())
                && last.chars().all(char::is_alphabetic)
        }
        None => false,
    }
}

/// True when a token is made only of letters and digits.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
