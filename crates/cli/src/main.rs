mod args;
mod commands;
pub mod defaults;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{CompressArgs, DecompressArgs, DemoArgs};
use commands::{demo, pack, unpack};

/// nucpack: 2-bit nucleotide sequence packing
///
/// Packs DNA sequences into a sentinel-prefixed integer at two bits per base
/// and restores them losslessly.
#[derive(Parser, Debug)]
#[command(name = "nucpack")]
#[command(author, version, about = "Packs DNA sequences at two bits per base", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress a long repeated sequence and check the round trip.
    ///
    /// Prints the original and compressed byte counts.
    Demo(DemoArgs),

    /// Pack a sequence into bytes.
    Compress(CompressArgs),

    /// Unpack bytes written by `compress` back into a sequence.
    Decompress(DecompressArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        defaults::VERBOSE_LOG_LEVEL
    } else {
        defaults::LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo(args) => demo::run_demo(&args)?,
        Commands::Compress(args) => pack::compress_sequence(&args)?,
        Commands::Decompress(args) => unpack::decompress_file(&args)?,
    }

    Ok(())
}
