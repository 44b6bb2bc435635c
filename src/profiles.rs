use crate::error::{CfResult, CipherError};
use crate::frequency::{letter_index, FrequencyTable, ALPHABET_LEN};
use crate::text::Case;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Letter frequencies computed from "A Tale of Two Cities".
pub const TALE_OF_TWO_CITIES: [f64; ALPHABET_LEN] = [
    0.0803, 0.014, 0.0232, 0.0467, 0.1247, 0.0226, 0.0209, 0.065, 0.0683, 0.0012, 0.008, 0.0367,
    0.0255, 0.0706, 0.0776, 0.0166, 0.0011, 0.0621, 0.0626, 0.0902, 0.0279, 0.0087, 0.0236,
    0.0012, 0.0203, 0.0004,
];

/// Textbook English table (Hoffstein, Pipher, Silverman, Table 1.3).
pub const HPS_ENGLISH: [f64; ALPHABET_LEN] = [
    0.082, 0.014, 0.028, 0.038, 0.131, 0.029, 0.02, 0.053, 0.064, 0.001, 0.004, 0.034, 0.025,
    0.071, 0.08, 0.02, 0.001, 0.068, 0.061, 0.105, 0.025, 0.009, 0.015, 0.002, 0.02, 0.001,
];

/// Most common English bigrams with their frequency per 1000 words.
pub const ENGLISH_BIGRAMS: [(&str, u32); 15] = [
    ("th", 168),
    ("he", 132),
    ("an", 92),
    ("re", 91),
    ("er", 88),
    ("in", 86),
    ("on", 71),
    ("at", 68),
    ("nd", 61),
    ("st", 53),
    ("es", 52),
    ("en", 51),
    ("of", 49),
    ("te", 46),
    ("ed", 46),
];

/// Most common English trigrams, most frequent first.
pub const ENGLISH_TRIGRAMS: [&str; 16] = [
    "the", "and", "tha", "ent", "ing", "ion", "tio", "for", "nde", "has", "nce", "edt", "tis",
    "oft", "sth", "men",
];

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ReferenceProfile {
    #[default]
    TaleOfTwoCities,
    Hps,
}

impl ReferenceProfile {
    pub fn values(&self) -> &'static [f64; ALPHABET_LEN] {
        match self {
            Self::TaleOfTwoCities => &TALE_OF_TWO_CITIES,
            Self::Hps => &HPS_ENGLISH,
        }
    }

    /// The literal table, not renormalized.
    pub fn table(&self) -> FrequencyTable {
        FrequencyTable::new(*self.values(), Case::Lower)
    }
}

/// Reads a `letter,value` (or tab separated) profile and scales it to sum to 1.
///
/// Rows that do not start with a single letter and a number are skipped.
pub fn load_profile<R: Read>(reader: R) -> CfResult<FrequencyTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = [0.0; ALPHABET_LEN];
    let mut loaded = 0;
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        // Tab separated files arrive as one field.
        let fields: Vec<&str> = if rec.len() == 1 {
            rec[0].split('\t').map(str::trim).collect()
        } else {
            rec.iter().collect()
        };

        if fields.len() < 2 {
            skipped += 1;
            continue;
        }

        let mut chars = fields[0].chars();
        let idx = match (chars.next(), chars.next()) {
            (Some(c), None) => letter_index(c),
            _ => None,
        };
        let val: Option<f64> = fields[1].parse().ok().filter(|v: &f64| *v >= 0.0);

        match (idx, val) {
            (Some(i), Some(v)) => {
                values[i] = v;
                loaded += 1;
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} unusable rows in reference profile", skipped);
    }

    let total: f64 = values.iter().sum();
    if loaded == 0 || total <= 0.0 {
        return Err(CipherError::InvalidParameter(
            "Reference profile has no usable letter rows".to_string(),
        ));
    }

    for v in values.iter_mut() {
        *v /= total;
    }
    debug!("Loaded reference profile with {} letters", loaded);

    Ok(FrequencyTable::new(values, Case::Lower))
}

pub fn load_profile_file<P: AsRef<Path>>(path: P) -> CfResult<FrequencyTable> {
    let file = File::open(path)?;
    load_profile(file)
}
