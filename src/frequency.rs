use crate::error::{CfResult, CipherError};
use crate::ngrams::count_ngrams;
use crate::text::{Case, NormalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const ALPHABET_LEN: usize = 26;

/// Alphabet index of an ASCII letter in either case.
pub fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Raw per-letter counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts {
    pub counts: [u64; ALPHABET_LEN],
}

impl LetterCounts {
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn get(&self, ch: char) -> u64 {
        letter_index(ch).map_or(0, |i| self.counts[i])
    }
}

/// Per-letter values indexed `a..=z`. Lookups accept either case; `case`
/// only controls how the table is rendered by [`FrequencyTable::to_map`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub case: Case,
    pub values: [f64; ALPHABET_LEN],
}

impl FrequencyTable {
    pub fn new(values: [f64; ALPHABET_LEN], case: Case) -> Self {
        Self { case, values }
    }

    /// Divides every count by the total letter count.
    pub fn from_counts(counts: &LetterCounts, case: Case) -> CfResult<Self> {
        let total = counts.total();
        if total == 0 {
            return Err(CipherError::DivisionUndefined);
        }

        let mut values = [0.0; ALPHABET_LEN];
        for (v, &c) in values.iter_mut().zip(counts.counts.iter()) {
            *v = c as f64 / total as f64;
        }
        Ok(Self { case, values })
    }

    pub fn get(&self, ch: char) -> f64 {
        letter_index(ch).map_or(0.0, |i| self.values[i])
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The table of the same text after every letter is shifted by `amount`.
    pub fn shifted(&self, amount: i64) -> Self {
        let k = amount.rem_euclid(ALPHABET_LEN as i64) as usize;
        let mut values = [0.0; ALPHABET_LEN];
        for (i, &v) in self.values.iter().enumerate() {
            values[(i + k) % ALPHABET_LEN] = v;
        }
        Self {
            case: self.case,
            values,
        }
    }

    /// Letter-keyed view for serialization and charts.
    pub fn to_map(&self) -> BTreeMap<char, f64> {
        let base = self.case.base().unwrap_or(b'a');
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((base + i as u8) as char, v))
            .collect()
    }
}

/// Counts each of the 26 letters, ignoring case.
pub fn letter_counts(text: &NormalizedText) -> LetterCounts {
    let folded = text.with_case(Case::Lower);
    let mut counts = [0u64; ALPHABET_LEN];
    for (gram, c) in count_ngrams(&folded, 1).counts {
        if let Some(i) = gram.chars().next().and_then(letter_index) {
            counts[i] += c as u64;
        }
    }
    LetterCounts { counts }
}

/// Proportion of each letter in `text`, keyed in the requested `case`.
///
/// `case` must be upper or lower; [`Case::Preserve`] has no fixed key set.
pub fn relative_frequency(text: &NormalizedText, case: Case) -> CfResult<FrequencyTable> {
    if case == Case::Preserve {
        return Err(CipherError::InvalidParameter(
            "case should be 'upper' or 'lower'".to_string(),
        ));
    }

    let counts = letter_counts(text);
    let table = FrequencyTable::from_counts(&counts, case)?;
    debug!("Frequency table over {} letters", counts.total());
    Ok(table)
}

/// Sum over the letters of `d1[letter] * d2[letter]`.
pub fn mutual_index_of_coincidence(d1: &FrequencyTable, d2: &FrequencyTable) -> f64 {
    d1.values
        .iter()
        .zip(d2.values.iter())
        .map(|(a, b)| a * b)
        .sum()
}

/// Probability of drawing the same letter twice, with replacement.
pub fn index_of_coincidence(d: &FrequencyTable) -> f64 {
    mutual_index_of_coincidence(d, d)
}

/// Probability of drawing the same letter twice, without replacement:
/// `sum f(f - 1) / (n(n - 1))`.
pub fn exact_index_of_coincidence(counts: &LetterCounts) -> CfResult<f64> {
    let n = counts.total();
    if n < 2 {
        return Err(CipherError::InsufficientData { observed: n });
    }

    let pairs: u64 = counts.counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    Ok(pairs as f64 / (n * (n - 1)) as f64)
}
