use anyhow::{Context, Result};
use nucpack_codec::{compress, decompress};
use tracing::{debug, info};

use crate::args::DemoArgs;

pub fn run_demo(args: &DemoArgs) -> Result<()> {
    args
        .unit
        .len()
        .checked_mul(args.repeat)
        .filter(|&len| len <= isize::MAX as usize)
        .with_context(|| {
            format!(
                "Demo sequence too large: {} bytes repeated {} times",
                args.unit.len(),
                args.repeat
            )
        })?;
    let sequence = args.unit.repeat(args.repeat);
    info!(
        unit_len = args.unit.len(),
        repeat = args.repeat,
        "Building demo sequence"
    );

    let packed = compress(&sequence).context("Failed to compress demo sequence")?;
    debug!(bit_len = packed.bit_len(), bases = packed.len(), "Packed sequence");

    let original_bytes = sequence.len();
    let compressed_bytes = packed.to_be_bytes().len();

    let restored = decompress(&packed).context("Failed to decompress demo sequence")?;
    let matches = restored == sequence.to_uppercase();

    println!("\n🧬 Sequence Compression");
    println!("{}", "=".repeat(50));
    println!("String bytes: {original_bytes}");
    println!("Compressed bytes: {compressed_bytes}");
    println!(
        "Ratio: {:.2}x",
        original_bytes as f64 / compressed_bytes as f64
    );
    println!("Matches original: {matches}");

    if !matches {
        anyhow::bail!("Decompressed sequence does not match the original");
    }
    Ok(())
}
