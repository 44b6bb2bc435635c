pub mod challenge;
pub mod config;
pub mod display;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod ngrams;
pub mod profiles;
pub mod shift;
pub mod text;
pub mod weave;
// cmd and reports belong to the binary crate (main.rs).

pub use error::{CfResult, CipherError};
pub use text::{normalize, Case, NormalizedText};
