use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Sequence unit to repeat
    #[arg(short, long, default_value = defaults::DEMO_UNIT)]
    pub unit: String,

    /// Number of repetitions of the unit
    #[arg(short = 'n', long, default_value_t = defaults::DEMO_REPEAT)]
    pub repeat: usize,
}

#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Nucleotide sequence (A, C, G, T; any case)
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the sequence from a file instead (surrounding whitespace is ignored)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write packed bytes to this file (default: print hex to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecompressArgs {
    /// File holding packed bytes written by `compress --output`
    pub input: PathBuf,
}
