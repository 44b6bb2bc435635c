use crate::reports;
use cipherforge::config::{positive_usize, InputArgs, ProfileOptions, TextOptions};
use cipherforge::error::CfResult;
use cipherforge::frequency::{
    exact_index_of_coincidence, index_of_coincidence, letter_counts, mutual_index_of_coincidence,
    relative_frequency,
};
use cipherforge::ngrams::{count_ngrams, ngrams_to_tsv};
use cipherforge::text::{normalize, Case};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Args, Debug, Clone)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub text: TextOptions,
    #[command(flatten)]
    pub profile: ProfileOptions,

    #[arg(short = 'n', long, default_value_t = 2, value_parser = positive_usize())]
    pub ngram: usize,

    /// How many of the most common n-grams to list.
    #[arg(long, default_value_t = 15)]
    pub top: usize,

    /// Print the n-gram counts as TSV and nothing else.
    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Serialize)]
pub struct FrequencySummary {
    pub letters: usize,
    pub frequencies: BTreeMap<char, f64>,
    pub index_of_coincidence: f64,
    pub exact_index_of_coincidence: Option<f64>,
    pub reference_match: f64,
    pub top_ngrams: Vec<(String, usize)>,
}

pub fn run(args: FrequencyArgs, json: bool) -> CfResult<()> {
    let raw = args.input.read()?;
    let text = normalize(&raw, args.text.case)?;
    let ngrams = count_ngrams(&text, args.ngram);

    if args.tsv {
        print!("{}", ngrams_to_tsv(&ngrams, args.top));
        return Ok(());
    }

    let table_case = if args.text.case == Case::Lower {
        Case::Lower
    } else {
        Case::Upper
    };
    let freqs = relative_frequency(&text, table_case)?;
    let reference = args.profile.reference()?;

    let summary = FrequencySummary {
        letters: text.len(),
        frequencies: freqs.to_map(),
        index_of_coincidence: index_of_coincidence(&freqs),
        exact_index_of_coincidence: exact_index_of_coincidence(&letter_counts(&text)).ok(),
        reference_match: mutual_index_of_coincidence(&freqs, &reference),
        top_ngrams: ngrams
            .sorted()
            .into_iter()
            .take(args.top)
            .map(|(g, c)| (g.to_string(), c))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_frequency_report(&freqs, &reference);
        reports::print_ngram_table(args.ngram, &summary.top_ngrams);
        reports::print_coincidence_summary(&summary);
    }
    Ok(())
}
