mod common;

use cipherforge::frequency::{
    exact_index_of_coincidence, index_of_coincidence, letter_counts, relative_frequency,
};
use cipherforge::kasiski::kasiski_distances;
use cipherforge::ngrams::count_ngrams;
use cipherforge::profiles::ReferenceProfile;
use cipherforge::shift::{best_shift, shift_scores, shift_text};
use cipherforge::weave::{keyword_shifts, vigenere_encrypt};
use cipherforge::{normalize, Case, CipherError};
use common::ENGLISH_SAMPLE;
use rstest::rstest;

#[test]
fn test_sample_is_long_enough() {
    assert!(normalize(ENGLISH_SAMPLE, Case::Upper).unwrap().len() >= 500);
}

#[rstest]
#[case("Attack at Dawn!", Case::Upper, "ATTACKATDAWN")]
#[case("Attack at Dawn!", Case::Lower, "attackatdawn")]
#[case("Attack at Dawn!", Case::Preserve, "AttackatDawn")]
#[case("  x-1_y\t", Case::Upper, "XY")]
fn test_normalize_cases(#[case] input: &str, #[case] case: Case, #[case] expected: &str) {
    assert_eq!(normalize(input, case).unwrap().as_str(), expected);
}

#[rstest]
#[case("")]
#[case("1984")]
#[case("¿¡ ... !?")]
fn test_normalize_no_letters(#[case] input: &str) {
    assert!(matches!(normalize(input, Case::Upper), Err(CipherError::NoLetters)));
}

#[rstest]
#[case("HELLO", 3, "KHOOR")]
#[case("KHOOR", -3, "HELLO")]
#[case("xyz", 3, "abc")]
#[case("Mixed Case!", 26, "Mixed Case!")]
fn test_shift_examples(#[case] input: &str, #[case] amount: i64, #[case] expected: &str) {
    assert_eq!(shift_text(input, amount), expected);
}

#[rstest]
fn test_best_shift_recovers_key(#[values(1, 2, 3, 7, 11, 13, 19, 24, 25)] k: i64) {
    let plain = normalize(ENGLISH_SAMPLE, Case::Upper).unwrap();
    let cipher = normalize(&shift_text(plain.as_str(), k), Case::Upper).unwrap();
    let reference = ReferenceProfile::TaleOfTwoCities.table();

    let best = best_shift(&cipher, &reference).unwrap();
    assert_eq!(best.shift.value() as i64, (-k).rem_euclid(26));
}

#[test]
fn test_best_shift_works_with_textbook_profile() {
    let plain = normalize(ENGLISH_SAMPLE, Case::Lower).unwrap();
    let cipher = normalize(&shift_text(plain.as_str(), 9), Case::Lower).unwrap();
    let best = best_shift(&cipher, &ReferenceProfile::Hps.table()).unwrap();
    assert_eq!(best.shift.value(), 17);
}

#[test]
fn test_all_scores_are_reported() {
    let cipher = normalize(&shift_text(ENGLISH_SAMPLE, 5), Case::Upper).unwrap();
    let scores = shift_scores(&cipher, &ReferenceProfile::default().table()).unwrap();
    assert_eq!(scores.len(), 26);
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    let best = best_shift(&cipher, &ReferenceProfile::default().table()).unwrap();
    assert!(scores.iter().all(|s| s.score <= best.score));
}

#[test]
fn test_english_ic_is_higher_than_vigenere_ic() {
    let plain = normalize(ENGLISH_SAMPLE, Case::Upper).unwrap();
    let cipher = vigenere_encrypt(&plain, &keyword_shifts("DICKENS").unwrap()).unwrap();

    let ic_plain = index_of_coincidence(&relative_frequency(&plain, Case::Upper).unwrap());
    let ic_cipher = index_of_coincidence(&relative_frequency(&cipher, Case::Upper).unwrap());
    assert!(ic_plain > 0.06, "plain IC {}", ic_plain);
    assert!(ic_cipher < ic_plain);

    let exact = exact_index_of_coincidence(&letter_counts(&plain)).unwrap();
    assert!(exact < ic_plain);
}

#[rstest]
#[case("ABCXYZABCPQRABC", vec![6, 6, 12])]
#[case("ABCDEFGABCHIABC", vec![5, 7, 12])]
#[case("NOREPEATSHERE", vec![])]
fn test_kasiski_examples(#[case] input: &str, #[case] expected: Vec<usize>) {
    let text = normalize(input, Case::Upper).unwrap();
    assert_eq!(kasiski_distances(&text, 3), expected);
}

#[test]
fn test_kasiski_distances_reflect_key_length() {
    let plain = normalize(ENGLISH_SAMPLE, Case::Upper).unwrap();
    let cipher = vigenere_encrypt(&plain, &keyword_shifts("KEY").unwrap()).unwrap();
    let distances = kasiski_distances(&cipher, 3);

    assert!(!distances.is_empty());
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    let multiples = distances.iter().filter(|&&d| d % 3 == 0).count();
    assert!(multiples * 2 > distances.len());
}

#[test]
fn test_ngram_counts_chain_without_length_checks() {
    let text = normalize("ab", Case::Upper).unwrap();
    for n in 0..6 {
        let counts = count_ngrams(&text, n);
        assert_eq!(counts.total(), if n == 0 { 0 } else { 3usize.saturating_sub(n) });
    }
}
