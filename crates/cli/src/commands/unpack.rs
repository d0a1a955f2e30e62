use anyhow::{Context, Result};
use nucpack_codec::{decompress, CompressedSequence};
use std::fs;
use tracing::debug;

use crate::args::DecompressArgs;

pub fn decompress_file(args: &DecompressArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    debug!(bytes = bytes.len(), "Read packed sequence");

    let packed = CompressedSequence::from_be_bytes(&bytes)
        .with_context(|| format!("{} is not a packed sequence", args.input.display()))?;
    let sequence = decompress(&packed).context("Failed to decompress sequence")?;

    println!("{sequence}");
    Ok(())
}
