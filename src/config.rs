use crate::display::{DEFAULT_GROUP_WIDTH, DEFAULT_LINE_WIDTH};
use crate::error::CfResult;
use crate::frequency::FrequencyTable;
use crate::profiles::{load_profile_file, ReferenceProfile};
use crate::text::Case;
use clap::builder::TypedValueParser;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Where the text to analyse comes from. Falls back to stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> CfResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            info!("📂 Reading text from {:?}", path);
            return Ok(fs::read_to_string(path)?);
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

#[derive(Args, Debug, Clone)]
pub struct TextOptions {
    #[arg(long, value_enum, default_value_t = Case::Upper)]
    pub case: Case,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { case: Case::Upper }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DisplayOptions {
    #[arg(long, default_value_t = DEFAULT_GROUP_WIDTH, value_parser = positive_usize())]
    pub group_width: usize,
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH, value_parser = positive_usize())]
    pub line_width: usize,
    /// Print the text as one unbroken line.
    #[arg(long, default_value_t = false)]
    pub no_spaces: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            group_width: DEFAULT_GROUP_WIDTH,
            line_width: DEFAULT_LINE_WIDTH,
            no_spaces: false,
        }
    }
}

/// Rejects zero at the argument boundary.
pub fn positive_usize() -> impl TypedValueParser<Value = usize> {
    clap::value_parser!(u64).range(1..).map(|v| v as usize)
}

#[derive(Args, Debug, Clone)]
pub struct ProfileOptions {
    #[arg(long, value_enum, default_value_t = ReferenceProfile::TaleOfTwoCities)]
    pub profile: ReferenceProfile,
    /// CSV/TSV file of `letter,frequency` rows; overrides --profile.
    #[arg(long)]
    pub profile_file: Option<PathBuf>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            profile: ReferenceProfile::default(),
            profile_file: None,
        }
    }
}

impl ProfileOptions {
    pub fn reference(&self) -> CfResult<FrequencyTable> {
        match &self.profile_file {
            Some(path) => {
                info!("📚 Loading reference profile: {:?}", path);
                load_profile_file(path)
            }
            None => Ok(self.profile.table()),
        }
    }
}
