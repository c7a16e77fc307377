use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of keywords the resume endpoint reports by default.
pub const DEFAULT_TOP_K: usize = 12;

/// ASCII alphabetic runs of at least three letters.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("static word regex is valid"));

/// Common English filler plus resume boilerplate that says nothing about a candidate.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "you", "your", "are", "was", "were",
    "have", "has", "our", "not", "but", "skill", "skills", "project", "projects", "work",
    "experience", "using", "use", "used", "also", "will", "can", "able",
];

/// Decodes bytes as UTF-8, dropping every invalid sequence instead of substituting
/// U+FFFD. Never fails.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Returns the `top_k` most frequent non-stopword words in `content`.
///
/// Words are lowercased before counting. Ties keep first-occurrence order.
pub fn extract_keywords(content: &[u8], top_k: usize) -> Vec<String> {
    if top_k == 0 {
        return vec![];
    }

    let text = decode_lossy(content);

    // word → (count, first index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, m) in WORD_RE.find_iter(&text).enumerate() {
        let word = m.as_str().to_lowercase();
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        counts.entry(word).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top_k)
        .map(|(word, _, _)| word)
        .collect()
}
