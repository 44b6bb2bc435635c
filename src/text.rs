use crate::error::{CfResult, CipherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Case folding applied by [`normalize`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Keep the original casing of every surviving letter.
    #[strum(serialize = "none")]
    #[serde(rename = "none")]
    #[value(name = "none")]
    Preserve,
    Lower,
    #[default]
    Upper,
}

impl Case {
    /// Parses a case flag, rejecting anything other than `none`, `lower` or `upper`.
    pub fn parse(flag: &str) -> CfResult<Self> {
        Self::from_str(flag.trim())
            .map_err(|_| CipherError::InvalidParameter(format!("Unknown case flag '{}'", flag)))
    }

    pub fn fold(self, ch: char) -> char {
        match self {
            Self::Preserve => ch,
            Self::Lower => ch.to_ascii_lowercase(),
            Self::Upper => ch.to_ascii_uppercase(),
        }
    }

    /// The first letter of the alphabet in this case, if the case is fixed.
    pub fn base(self) -> Option<u8> {
        match self {
            Self::Preserve => None,
            Self::Lower => Some(b'a'),
            Self::Upper => Some(b'A'),
        }
    }
}

/// Text reduced to the 26 ASCII letters. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Caller guarantees `letters` is non-empty and ASCII-alphabetic.
    pub(crate) fn from_letters(letters: String) -> Self {
        debug_assert!(!letters.is_empty());
        debug_assert!(letters.bytes().all(|b| b.is_ascii_alphabetic()));
        Self(letters)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Re-folds the letters to another case.
    pub fn with_case(&self, case: Case) -> Self {
        Self(self.0.chars().map(|c| case.fold(c)).collect())
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips everything but ASCII letters from `text` and applies `case`.
///
/// Returns [`CipherError::NoLetters`] when nothing survives, so statistics are
/// never silently computed over an empty text.
pub fn normalize(text: &str, case: Case) -> CfResult<NormalizedText> {
    let letters: String = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| case.fold(c))
        .collect();

    if letters.is_empty() {
        return Err(CipherError::NoLetters);
    }

    Ok(NormalizedText::from_letters(letters))
}
