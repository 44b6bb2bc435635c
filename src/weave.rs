use crate::error::{CfResult, CipherError};
use crate::shift::{shift_text, ShiftKey};
use crate::text::{normalize, Case, NormalizedText};

/// Interleaves `streams` round-robin.
///
/// Streams may differ in length by at most one character. After the rounds
/// over the shortest length, every stream one character longer contributes
/// its last character, in stream order. A wider gap is rejected with
/// [`CipherError::InvalidShape`].
pub fn weave<S: AsRef<str>>(streams: &[S]) -> CfResult<String> {
    let chars: Vec<Vec<char>> = streams.iter().map(|s| s.as_ref().chars().collect()).collect();

    let (Some(short), Some(long)) = (
        chars.iter().map(Vec::len).min(),
        chars.iter().map(Vec::len).max(),
    ) else {
        return Ok(String::new());
    };

    if long - short > 1 {
        return Err(CipherError::InvalidShape(format!(
            "stream lengths range from {} to {}, at most one character apart is allowed",
            short, long
        )));
    }

    let total: usize = chars.iter().map(Vec::len).sum();
    let mut output = String::with_capacity(total);
    for round in 0..short {
        for s in &chars {
            output.push(s[round]);
        }
    }
    for s in chars.iter().filter(|s| s.len() > short) {
        output.push(s[short]);
    }

    Ok(output)
}

/// Splits `merged` into `stream_count` streams, sending character `i` to
/// stream `i % stream_count`. Inverse of [`weave`] whenever the longer streams
/// come first, which is the only shape this produces.
pub fn deweave(merged: &str, stream_count: usize) -> CfResult<Vec<String>> {
    if stream_count == 0 {
        return Err(CipherError::InvalidParameter(
            "stream count must be at least 1".to_string(),
        ));
    }

    let mut streams = vec![String::new(); stream_count];
    for (i, c) in merged.chars().enumerate() {
        streams[i % stream_count].push(c);
    }
    Ok(streams)
}

/// Multi-key shift cipher: letter `i` is shifted by `shifts[i % shifts.len()]`.
pub fn vigenere_encrypt(text: &NormalizedText, shifts: &[ShiftKey]) -> CfResult<NormalizedText> {
    let amounts: Vec<i64> = shifts.iter().map(|k| k.value() as i64).collect();
    apply_shifts(text, &amounts)
}

pub fn vigenere_decrypt(text: &NormalizedText, shifts: &[ShiftKey]) -> CfResult<NormalizedText> {
    let amounts: Vec<i64> = shifts.iter().map(|k| -(k.value() as i64)).collect();
    apply_shifts(text, &amounts)
}

fn apply_shifts(text: &NormalizedText, amounts: &[i64]) -> CfResult<NormalizedText> {
    let streams = deweave(text.as_str(), amounts.len())?;
    let shifted: Vec<String> = streams
        .iter()
        .zip(amounts)
        .map(|(s, &a)| shift_text(s, a))
        .collect();
    Ok(NormalizedText::from_letters(weave(&shifted)?))
}

/// Parses a keyword such as `"LEMON"` into per-position shifts (A = 0).
pub fn keyword_shifts(keyword: &str) -> CfResult<Vec<ShiftKey>> {
    let text = normalize(keyword, Case::Upper)?;
    Ok(text
        .as_str()
        .bytes()
        .map(|b| ShiftKey::new((b - b'A') as i64))
        .collect())
}
