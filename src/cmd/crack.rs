use crate::reports;
use cipherforge::config::{DisplayOptions, InputArgs, ProfileOptions};
use cipherforge::error::CfResult;
use cipherforge::shift::{best_shift, shift_normalized, shift_scores, ShiftScore};
use cipherforge::text::{normalize, Case};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub profile: ProfileOptions,
    #[command(flatten)]
    pub display: DisplayOptions,
}

#[derive(Debug, Serialize)]
struct CrackOutput {
    best: ShiftScore,
    scores: Vec<ShiftScore>,
    plaintext: String,
}

pub fn run(args: CrackArgs, json: bool) -> CfResult<()> {
    let raw = args.input.read()?;
    let ciphertext = normalize(&raw, Case::Upper)?;
    let reference = args.profile.reference()?;

    let scores = shift_scores(&ciphertext, &reference)?;
    let best = best_shift(&ciphertext, &reference)?;
    let plaintext = shift_normalized(&ciphertext, best.shift.value() as i64).into_string();

    if json {
        let out = CrackOutput {
            best,
            scores: scores.to_vec(),
            plaintext,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_shift_scores(&scores, best);
        println!("\nBest shift: {} (score {:.4})\n", best.shift, best.score);
        reports::print_text_block(&plaintext, &args.display);
    }
    Ok(())
}
