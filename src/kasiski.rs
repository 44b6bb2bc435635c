//! Kasiski examination: spacing between repeated n-grams.
//!
//! Cost is quadratic in the number of occurrences of each repeated n-gram,
//! not in the text length. Key-length inference from the distances is left to
//! the caller.

use crate::ngrams::count_ngrams;
use crate::text::{Case, NormalizedText};
use std::collections::BTreeMap;
use tracing::debug;

/// Conventional n-gram length for the examination.
pub const DEFAULT_NGRAM: usize = 3;

/// Start positions of every n-gram that occurs more than once.
///
/// Matching ignores case. Overlapping occurrences are reported separately.
pub fn repeat_positions(text: &NormalizedText, n: usize) -> BTreeMap<String, Vec<usize>> {
    let folded = text.with_case(Case::Upper);
    let counts = count_ngrams(&folded, n);

    let mut positions: BTreeMap<String, Vec<usize>> = counts
        .repeats()
        .into_iter()
        .map(|g| (g.to_string(), Vec::new()))
        .collect();

    if positions.is_empty() {
        return positions;
    }

    let s = folded.as_str();
    for i in 0..=s.len() - n {
        if let Some(starts) = positions.get_mut(&s[i..i + n]) {
            starts.push(i);
        }
    }

    positions
}

/// Distances between every pair of start positions of each repeated n-gram,
/// sorted ascending with duplicates kept.
pub fn kasiski_distances(text: &NormalizedText, n: usize) -> Vec<usize> {
    let positions = repeat_positions(text, n);

    let mut distances = Vec::new();
    for starts in positions.values() {
        for (i, &a) in starts.iter().enumerate() {
            for &b in &starts[i + 1..] {
                distances.push(b - a);
            }
        }
    }
    distances.sort();

    debug!(
        "Kasiski: {} repeated {}-grams, {} distances",
        positions.len(),
        n,
        distances.len()
    );
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    #[test]
    fn test_single_repeat() {
        let t = normalize("ABCXYZABCPQRABC", Case::Upper).unwrap();
        let pos = repeat_positions(&t, 3);
        assert_eq!(pos.len(), 1);
        assert_eq!(pos["ABC"], vec![0, 6, 12]);
        assert_eq!(kasiski_distances(&t, 3), vec![6, 6, 12]);
    }

    #[test]
    fn test_uneven_spacing() {
        let t = normalize("ABCDEFGABCHIABC", Case::Upper).unwrap();
        assert_eq!(repeat_positions(&t, 3)["ABC"], vec![0, 7, 12]);
        assert_eq!(kasiski_distances(&t, 3), vec![5, 7, 12]);
    }

    #[test]
    fn test_overlapping_occurrences() {
        let t = normalize("AAAAA", Case::Upper).unwrap();
        assert_eq!(repeat_positions(&t, 3)["AAA"], vec![0, 1, 2]);
        assert_eq!(kasiski_distances(&t, 3), vec![1, 1, 2]);
    }

    #[test]
    fn test_case_is_ignored() {
        let t = normalize("theXXXThe", Case::Preserve).unwrap();
        assert_eq!(kasiski_distances(&t, 3), vec![6]);
    }

    #[test]
    fn test_degenerate_inputs_are_empty() {
        let t = normalize("ABCDEF", Case::Upper).unwrap();
        assert!(kasiski_distances(&t, 3).is_empty());
        assert!(kasiski_distances(&t, 0).is_empty());
        assert!(kasiski_distances(&t, 7).is_empty());
    }
}
