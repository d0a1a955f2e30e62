use anyhow::{Context, Result};
use nucpack_codec::compress;
use std::fs;
use tracing::{debug, info};

use crate::args::CompressArgs;

pub fn compress_sequence(args: &CompressArgs) -> Result<()> {
    let sequence = match (&args.sequence, &args.input) {
        (Some(sequence), _) => sequence.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .trim()
            .to_string(),
        (None, None) => anyhow::bail!("Input required: pass a sequence or --input"),
    };

    let packed = compress(&sequence).context("Failed to compress sequence")?;
    let bytes = packed.to_be_bytes();
    debug!(bases = packed.len(), bit_len = packed.bit_len(), "Packed sequence");

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "Wrote packed sequence");
            println!(
                "✓ Packed {} bases into {} bytes: {}",
                packed.len(),
                bytes.len(),
                path.display()
            );
        }
        None => println!("{}", hex::encode(&bytes)),
    }

    Ok(())
}
