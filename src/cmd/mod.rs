pub mod challenge;
pub mod cipher;
pub mod crack;
pub mod frequency;
pub mod kasiski;
