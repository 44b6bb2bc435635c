use crate::cmd::frequency::FrequencySummary;
use cipherforge::config::DisplayOptions;
use cipherforge::display::add_spaces;
use cipherforge::frequency::{FrequencyTable, ALPHABET_LEN};
use cipherforge::profiles::{ENGLISH_BIGRAMS, ENGLISH_TRIGRAMS};
use cipherforge::shift::ShiftScore;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::BTreeMap;

// Scores above this usually mean the text reads as English.
const ENGLISH_MATCH_THRESHOLD: f64 = 0.06;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn bar(value: f64, scale: f64) -> String {
    "#".repeat((value * scale).round() as usize)
}

pub fn print_text_block(text: &str, display: &DisplayOptions) {
    if display.no_spaces {
        println!("{}", text);
    } else {
        println!("{}", add_spaces(text, display.group_width, display.line_width));
    }
}

pub fn print_frequency_report(freqs: &FrequencyTable, reference: &FrequencyTable) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Text").fg(Color::Cyan),
        Cell::new("Reference"),
        Cell::new(""),
    ]);

    for (i, (letter, value)) in freqs.to_map().into_iter().enumerate() {
        let expected = reference.values[i];
        table.add_row(vec![
            Cell::new(letter).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.4}", value)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", expected)),
            Cell::new(bar(value, 200.0)),
        ]);
    }

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn print_ngram_table(n: usize, top: &[(String, usize)]) {
    if top.is_empty() {
        println!("\nNo {}-grams (text too short).", n);
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{}-gram", n)).add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Common in English"),
    ]);
    for (gram, count) in top {
        table.add_row(vec![
            Cell::new(gram),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(if is_common_english(gram) { "*" } else { "" })
                .set_alignment(CellAlignment::Center)
                .fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

fn is_common_english(gram: &str) -> bool {
    let lower = gram.to_ascii_lowercase();
    ENGLISH_BIGRAMS.iter().any(|(b, _)| *b == lower) || ENGLISH_TRIGRAMS.contains(&lower.as_str())
}

pub fn print_coincidence_summary(summary: &FrequencySummary) {
    println!("\nLetters:                    {}", summary.letters);
    println!("Index of coincidence:       {:.5}", summary.index_of_coincidence);
    match summary.exact_index_of_coincidence {
        Some(ic) => println!("Exact index of coincidence: {:.5}", ic),
        None => println!("Exact index of coincidence: n/a (fewer than 2 letters)"),
    }
    println!("Match with reference:       {:.5}", summary.reference_match);
}

pub fn print_shift_scores(scores: &[ShiftScore; ALPHABET_LEN], best: ShiftScore) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new(""),
    ]);

    for s in scores {
        let color = if s.shift == best.shift {
            Color::Green
        } else if s.score > ENGLISH_MATCH_THRESHOLD {
            Color::Yellow
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(s.shift).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", s.score)).fg(color),
            Cell::new(bar(s.score, 400.0)).fg(color),
        ]);
    }
    println!("{}", table);
}

pub fn print_repeats(repeats: &BTreeMap<String, Vec<usize>>) {
    if repeats.is_empty() {
        println!("No repeated n-grams.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("N-gram").add_attribute(Attribute::Bold),
        Cell::new("Positions"),
    ]);
    for (gram, starts) in repeats {
        let joined: Vec<String> = starts.iter().map(|p| p.to_string()).collect();
        table.add_row(vec![Cell::new(gram), Cell::new(joined.join(", "))]);
    }
    println!("{}", table);
}

pub fn print_key_length_votes(votes: &[(usize, usize)], total: usize) {
    if total == 0 {
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key length").add_attribute(Attribute::Bold),
        Cell::new("Divides"),
        Cell::new(""),
    ]);
    for &(len, count) in votes {
        table.add_row(vec![
            Cell::new(len).set_alignment(CellAlignment::Right),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(bar(count as f64 / total as f64, 40.0)),
        ]);
    }
    println!("\n{}", table);
}
