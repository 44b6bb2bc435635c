use crate::reports;
use cipherforge::challenge::{shift_challenge, vigenere_challenge};
use cipherforge::config::{positive_usize, DisplayOptions, InputArgs};
use cipherforge::error::CfResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChallengeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub display: DisplayOptions,

    #[arg(short, long, default_value_t = 200, value_parser = positive_usize())]
    pub length: usize,

    /// Number of independent shifts; 1 gives a plain shift cipher.
    #[arg(long, default_value_t = 1, value_parser = positive_usize())]
    pub key_len: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Also print the key and plaintext.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,
}

pub fn run(args: ChallengeArgs, json: bool) -> CfResult<()> {
    let source = args.input.read()?;
    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let challenge = if args.key_len == 1 {
        shift_challenge(&source, args.length, &mut rng)?
    } else {
        vigenere_challenge(&source, args.length, args.key_len, &mut rng)?
    };
    info!("Generated challenge of {} letters", challenge.ciphertext.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&challenge)?);
        return Ok(());
    }

    reports::print_text_block(challenge.ciphertext.as_str(), &args.display);
    if args.reveal {
        let shifts: Vec<String> = challenge.key.iter().map(|k| k.to_string()).collect();
        let letters: String = challenge.key.iter().map(|k| k.as_letter()).collect();
        println!("\nKey: {} ({})", letters, shifts.join(","));
        reports::print_text_block(challenge.plaintext.as_str(), &args.display);
    }
    Ok(())
}
