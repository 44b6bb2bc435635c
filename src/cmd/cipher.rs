use crate::reports;
use cipherforge::config::{DisplayOptions, InputArgs, TextOptions};
use cipherforge::error::{CfResult, CipherError};
use cipherforge::shift::{shift_text, ShiftKey};
use cipherforge::text::normalize;
use cipherforge::weave::{keyword_shifts, vigenere_decrypt, vigenere_encrypt};
use clap::Args;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

#[derive(Args, Debug, Clone)]
pub struct CipherArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub text: TextOptions,
    #[command(flatten)]
    pub display: DisplayOptions,

    /// Shift amount (may be negative).
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "key")]
    pub shift: Option<i64>,

    /// Keyword for a multi-key shift, e.g. LEMON.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Seed for the random shift used when neither --shift nor --key is given.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct CipherOutput {
    key: Vec<ShiftKey>,
    output: String,
}

pub fn run(args: CipherArgs, direction: Direction, json: bool) -> CfResult<()> {
    let raw = args.input.read()?;
    let text = normalize(&raw, args.text.case)?;

    let key: Vec<ShiftKey> = match (&args.key, args.shift) {
        (Some(word), _) => keyword_shifts(word)?,
        (None, Some(s)) => vec![ShiftKey::new(s)],
        (None, None) if direction == Direction::Encrypt => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            vec![ShiftKey::new(rng.i64(1..=25))]
        }
        (None, None) => {
            return Err(CipherError::InvalidParameter(
                "decrypt needs --shift or --key".to_string(),
            ))
        }
    };
    info!("Using {} shift(s)", key.len());

    let output = match (direction, key.as_slice()) {
        (Direction::Encrypt, [single]) => shift_text(text.as_str(), single.value() as i64),
        (Direction::Decrypt, [single]) => shift_text(text.as_str(), single.inverse().value() as i64),
        (Direction::Encrypt, _) => vigenere_encrypt(&text, &key)?.into_string(),
        (Direction::Decrypt, _) => vigenere_decrypt(&text, &key)?.into_string(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&CipherOutput { key, output })?);
    } else {
        reports::print_text_block(&output, &args.display);
    }
    Ok(())
}
