//! Word-cloud input: the concatenated body text and a ranked frequency table.
//!
//! Tokens are lower-cased and split on characters that are neither
//! alphanumeric nor an inner apostrophe. Tokens shorter than two characters,
//! purely numeric tokens, and stopwords are dropped; a trailing `'s` is
//! stripped before counting.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::WordCloudConfig;
use crate::constants::pipeline::WORD_CLOUD_MIN_TOKEN_CHARS;
use crate::data::{ArticleFields, ArticleRow, Table};
use crate::types::Word;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "has",
        "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
        "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
        "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
        "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
        "same", "shall", "she", "should", "since", "so", "some", "such", "than", "that", "the",
        "their", "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "with",
        "would", "you", "your", "yours", "yourself", "yourselves", "www", "http", "https",
        "com", "can't", "don't", "isn't", "it's", "won't", "didn't", "doesn't",
    ]
    .into_iter()
    .collect()
});

/// Occurrence count of one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    /// Normalized token.
    pub word: Word,
    /// Occurrences across the joined text.
    pub count: usize,
}

/// Input handed to the external word-cloud layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WordCloudSource {
    /// Every non-missing body joined by a single space, in row order.
    pub text: String,
    /// Number of bodies that contributed to `text`.
    pub documents: usize,
    /// Ranked by count descending, then word ascending.
    pub frequencies: Vec<WordFrequency>,
}

impl WordCloudSource {
    /// Whether there is nothing to lay out.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Build the word-cloud input from `table`.
pub fn word_cloud_source(table: &Table<ArticleRow>, config: &WordCloudConfig) -> WordCloudSource {
    let bodies: Vec<&str> = table.rows.iter().filter_map(|row| row.body()).collect();
    let text = bodies.join(" ");
    let frequencies = word_frequencies(&text, &config.extra_stopwords, config.max_words);
    WordCloudSource {
        text,
        documents: bodies.len(),
        frequencies,
    }
}

/// Count and rank the words of `text`.
pub fn word_frequencies(
    text: &str,
    extra_stopwords: &BTreeSet<Word>,
    max_words: usize,
) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        if STOP_WORDS.contains(token.as_str()) || extra_stopwords.contains(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }
    let mut ranked: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(max_words);
    ranked
}

/// Split `text` into normalized word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in lowered.chars() {
        if ch.is_alphanumeric() || (ch == '\'' && !current.is_empty()) {
            current.push(ch);
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }
    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: String) {
    let mut token = raw.trim_end_matches('\'').to_string();
    if let Some(stem) = token.strip_suffix("'s") {
        token = stem.to_string();
    }
    if token.chars().count() < WORD_CLOUD_MIN_TOKEN_CHARS {
        return;
    }
    if token.chars().all(|ch| ch.is_numeric()) {
        return;
    }
    tokens.push(token);
}
