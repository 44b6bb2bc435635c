use crate::reports;
use cipherforge::config::{positive_usize, InputArgs};
use cipherforge::error::CfResult;
use cipherforge::kasiski::{kasiski_distances, repeat_positions, DEFAULT_NGRAM};
use cipherforge::text::{normalize, Case};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Args, Debug, Clone)]
pub struct KasiskiArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short = 'n', long, default_value_t = DEFAULT_NGRAM, value_parser = positive_usize())]
    pub ngram: usize,

    /// Largest key length to tally in the factor histogram.
    #[arg(long, default_value_t = 20, value_parser = positive_usize())]
    pub max_key_len: usize,
}

#[derive(Debug, Serialize)]
struct KasiskiOutput {
    repeats: BTreeMap<String, Vec<usize>>,
    distances: Vec<usize>,
    key_length_votes: Vec<(usize, usize)>,
}

/// For each candidate key length `2..=max_len`, how many distances it divides.
pub fn factor_histogram(distances: &[usize], max_len: usize) -> Vec<(usize, usize)> {
    (2..=max_len)
        .map(|len| (len, distances.iter().filter(|&&d| d % len == 0).count()))
        .collect()
}

pub fn run(args: KasiskiArgs, json: bool) -> CfResult<()> {
    let raw = args.input.read()?;
    let text = normalize(&raw, Case::Upper)?;

    let repeats = repeat_positions(&text, args.ngram);
    let distances = kasiski_distances(&text, args.ngram);
    let votes = factor_histogram(&distances, args.max_key_len);

    if json {
        let out = KasiskiOutput {
            repeats,
            distances,
            key_length_votes: votes,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_repeats(&repeats);
        println!("\nDistances: {:?}", distances);
        reports::print_key_length_votes(&votes, distances.len());
    }
    Ok(())
}
