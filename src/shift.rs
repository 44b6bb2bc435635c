use crate::error::CfResult;
use crate::frequency::{
    letter_counts, mutual_index_of_coincidence, FrequencyTable, ALPHABET_LEN,
};
use crate::text::{Case, NormalizedText};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A rotation amount, always stored in `0..26`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub fn new(amount: i64) -> Self {
        Self(amount.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The key that undoes this one.
    pub fn inverse(self) -> Self {
        Self::new(-(self.0 as i64))
    }

    pub fn as_letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftScore {
    pub shift: ShiftKey,
    pub score: f64,
}

/// Rotates one ASCII letter within its own case; anything else is returned as is.
///
/// `shift_letter('Y', 3) == 'B'`
pub fn shift_letter(ch: char, amount: i64) -> char {
    let base = if ch.is_ascii_lowercase() {
        b'a'
    } else if ch.is_ascii_uppercase() {
        b'A'
    } else {
        return ch;
    };
    let offset = (ch as u8 - base) + ShiftKey::new(amount).value();
    (base + offset % ALPHABET_LEN as u8) as char
}

pub fn shift_text(text: &str, amount: i64) -> String {
    text.chars().map(|c| shift_letter(c, amount)).collect()
}

pub fn shift_normalized(text: &NormalizedText, amount: i64) -> NormalizedText {
    NormalizedText::from_letters(shift_text(text.as_str(), amount))
}

/// Scores all 26 candidate shifts of `ciphertext` against `reference`.
///
/// Entry `k` holds the mutual index of coincidence between `reference` and
/// the letter distribution of `shift_text(ciphertext, k)`.
pub fn shift_scores(
    ciphertext: &NormalizedText,
    reference: &FrequencyTable,
) -> CfResult<[ShiftScore; ALPHABET_LEN]> {
    let counts = letter_counts(ciphertext);
    let table = FrequencyTable::from_counts(&counts, Case::Upper)?;

    let mut scores = [ShiftScore {
        shift: ShiftKey::default(),
        score: 0.0,
    }; ALPHABET_LEN];

    for (k, slot) in scores.iter_mut().enumerate() {
        let decrypted = table.shifted(k as i64);
        *slot = ShiftScore {
            shift: ShiftKey::new(k as i64),
            score: mutual_index_of_coincidence(&decrypted, reference),
        };
    }

    Ok(scores)
}

/// The shift that makes `ciphertext` look most like `reference`.
/// Ties go to the smallest shift.
pub fn best_shift(ciphertext: &NormalizedText, reference: &FrequencyTable) -> CfResult<ShiftScore> {
    let scores = shift_scores(ciphertext, reference)?;

    let mut best = scores[0];
    for s in &scores[1..] {
        if s.score > best.score {
            best = *s;
        }
    }

    debug!(
        "Best shift {} (score {:.4}) over {} letters",
        best.shift,
        best.score,
        ciphertext.len()
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::relative_frequency;
    use crate::text::normalize;

    #[test]
    fn test_shift_letter_wraps() {
        assert_eq!(shift_letter('Y', 3), 'B');
        assert_eq!(shift_letter('b', -3), 'y');
        assert_eq!(shift_letter('a', 52), 'a');
        assert_eq!(shift_letter('!', 5), '!');
    }

    #[test]
    fn test_shift_text_keeps_non_letters() {
        assert_eq!(shift_text("Hello, World!", 13), "Uryyb, Jbeyq!");
        assert_eq!(shift_text("HELLO", 3), "KHOOR");
        assert_eq!(shift_text("KHOOR", -3), "HELLO");
    }

    #[test]
    fn test_shift_key_normalizes() {
        assert_eq!(ShiftKey::new(-3).value(), 23);
        assert_eq!(ShiftKey::new(29).value(), 3);
        assert_eq!(ShiftKey::new(3).inverse().value(), 23);
        assert_eq!(ShiftKey::new(0).inverse().value(), 0);
        assert_eq!(ShiftKey::new(i64::MIN).value(), 18);
    }

    #[test]
    fn test_shift_key_letters() {
        assert_eq!(ShiftKey::new(0).as_letter(), 'A');
        assert_eq!(ShiftKey::new(11).as_letter(), 'L');
        assert_eq!(ShiftKey::new(-1).as_letter(), 'Z');
    }

    #[test]
    fn test_extreme_amounts_wrap() {
        // i64::MAX = 7 (mod 26), i64::MIN + 1 = -7 (mod 26).
        assert_eq!(shift_letter('Z', i64::MAX), 'G');
        assert_eq!(shift_letter('a', i64::MAX), 'h');
        assert_eq!(shift_letter('G', i64::MIN + 1), 'Z');
        assert_eq!(shift_letter('H', i64::MIN), 'Z');
        assert_eq!(shift_text("KHOOR", i64::MAX - 10), "HELLO");
    }

    #[test]
    fn test_scores_cover_every_shift() {
        let ct = normalize("KHOOR ZRUOG", Case::Upper).unwrap();
        let reference = relative_frequency(&normalize("HELLOWORLD", Case::Upper).unwrap(), Case::Upper)
            .unwrap();
        let scores = shift_scores(&ct, &reference).unwrap();
        for (k, s) in scores.iter().enumerate() {
            assert_eq!(s.shift.value() as usize, k);
        }
        let best = best_shift(&ct, &reference).unwrap();
        assert_eq!(best.shift.value(), 23);
    }

    #[test]
    fn test_ties_pick_smallest_shift() {
        // Every rotation of a uniform text scores the same.
        let ct = normalize("abcdefghijklmnopqrstuvwxyz", Case::Lower).unwrap();
        let reference = relative_frequency(&ct, Case::Lower).unwrap();
        assert_eq!(best_shift(&ct, &reference).unwrap().shift.value(), 0);
    }
}
