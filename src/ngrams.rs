use crate::text::NormalizedText;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

/// Multiset of overlapping n-grams taken from a [`NormalizedText`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NGramCounts {
    pub n: usize,
    pub counts: HashMap<String, usize>,
}

impl NGramCounts {
    pub fn get(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Total number of windows counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// N-grams seen more than once, sorted alphabetically.
    pub fn repeats(&self) -> Vec<&str> {
        let mut reps: Vec<&str> = self
            .counts
            .iter()
            .filter(|(_, &c)| c > 1)
            .map(|(g, _)| g.as_str())
            .collect();
        reps.sort_unstable();
        reps
    }

    /// Entries ordered by count (descending), ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(g, &c)| (g.as_str(), c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Counts every overlapping window of length `n`, left to right.
///
/// A text shorter than `n`, or `n == 0`, yields an empty multiset rather than
/// an error so callers can chain counts without checking lengths first.
pub fn count_ngrams(text: &NormalizedText, n: usize) -> NGramCounts {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let s = text.as_str();

    if n > 0 && s.len() >= n {
        // ASCII only, so byte offsets are char boundaries.
        for i in 0..=s.len() - n {
            *counts.entry(s[i..i + n].to_string()).or_default() += 1;
        }
    }

    NGramCounts { n, counts }
}

/// Formats the `top_n` most frequent n-grams as `gram<TAB>count` lines.
/// `top_n == 0` keeps everything.
pub fn ngrams_to_tsv(counts: &NGramCounts, top_n: usize) -> String {
    let limit = if top_n == 0 { usize::MAX } else { top_n };
    let mut output = String::new();
    for (gram, count) in counts.sorted().into_iter().take(limit) {
        let _ = writeln!(output, "{}\t{}", gram, count);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{normalize, Case};

    fn text(s: &str) -> NormalizedText {
        normalize(s, Case::Upper).unwrap()
    }

    #[test]
    fn test_monograms_match_letter_counts() {
        let c = count_ngrams(&text("banana"), 1);
        assert_eq!(c.get("A"), 3);
        assert_eq!(c.get("N"), 2);
        assert_eq!(c.get("B"), 1);
        assert_eq!(c.total(), 6);
    }

    #[test]
    fn test_overlapping_windows() {
        let c = count_ngrams(&text("AAAA"), 2);
        assert_eq!(c.get("AA"), 3);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_short_text_and_zero_n_are_empty() {
        assert!(count_ngrams(&text("AB"), 3).is_empty());
        assert!(count_ngrams(&text("AB"), 0).is_empty());
    }

    #[test]
    fn test_repeats() {
        let c = count_ngrams(&text("ABCXYZABCPQRABC"), 3);
        assert_eq!(c.repeats(), vec!["ABC"]);
        assert_eq!(c.get("ABC"), 3);
    }

    #[test]
    fn test_tsv_is_sorted_and_limited() {
        let c = count_ngrams(&text("the theme then"), 2);
        let tsv = ngrams_to_tsv(&c, 2);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines, vec!["HE\t3", "TH\t3"]);
    }
}
