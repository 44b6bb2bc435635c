use crate::error::{CfResult, CipherError};
use crate::shift::{shift_normalized, ShiftKey};
use crate::text::{normalize, Case, NormalizedText};
use crate::weave::vigenere_encrypt;
use serde::Serialize;

/// A plaintext excerpt and its encryption under a randomly chosen key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    pub plaintext: NormalizedText,
    pub ciphertext: NormalizedText,
    pub key: Vec<ShiftKey>,
}

/// Picks a random window of `length` letters from `source`.
fn excerpt(source: &str, length: usize, rng: &mut fastrand::Rng) -> CfResult<NormalizedText> {
    let letters = normalize(source, Case::Upper)?;
    if length == 0 || length > letters.len() {
        return Err(CipherError::InvalidParameter(format!(
            "excerpt length {} must be between 1 and {}",
            length,
            letters.len()
        )));
    }

    let start = rng.usize(0..=letters.len() - length);
    Ok(NormalizedText::from_letters(
        letters.as_str()[start..start + length].to_string(),
    ))
}

/// Shift-encrypts a random excerpt with a shift drawn from `1..=25`.
pub fn shift_challenge(source: &str, length: usize, rng: &mut fastrand::Rng) -> CfResult<Challenge> {
    let plaintext = excerpt(source, length, rng)?;
    let key = ShiftKey::new(rng.i64(1..=25));
    let ciphertext = shift_normalized(&plaintext, key.value() as i64);

    Ok(Challenge {
        plaintext,
        ciphertext,
        key: vec![key],
    })
}

/// Vigenère-encrypts a random excerpt with `key_len` shifts drawn from `1..=25`.
pub fn vigenere_challenge(
    source: &str,
    length: usize,
    key_len: usize,
    rng: &mut fastrand::Rng,
) -> CfResult<Challenge> {
    if key_len == 0 {
        return Err(CipherError::InvalidParameter(
            "key length must be at least 1".to_string(),
        ));
    }

    let plaintext = excerpt(source, length, rng)?;
    let key: Vec<ShiftKey> = (0..key_len).map(|_| ShiftKey::new(rng.i64(1..=25))).collect();
    let ciphertext = vigenere_encrypt(&plaintext, &key)?;

    Ok(Challenge {
        plaintext,
        ciphertext,
        key,
    })
}
