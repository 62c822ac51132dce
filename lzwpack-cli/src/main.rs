//! lzwpack CLI - chunked LZW file compression.
//!
//! Thin file-I/O glue around the `lzwpack` codec: read the input file,
//! run the pure transform, write the output file.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lzwpack")]
#[command(author, version, about = "Chunked LZW file compressor")]
#[command(long_about = "
Compress and decompress files with chunked LZW.

Examples:
  lzwpack compress notes.txt            # writes notes.txt.lzw
  lzwpack compress notes.txt -o n.lzw
  lzwpack decompress notes.txt.lzw      # writes notes.txt
  lzwpack decompress archive.bin        # writes archive.bin_uncompressed
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output path (default: input path + ".lzw")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a file
    #[command(aliases = ["d", "u"])]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output path (default: input path without ".lzw", or with
        /// "_uncompressed" appended when the extension differs)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, output),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| compressed_path(input));
    let data = fs::read(input)?;
    let container = lzwpack::compress(&data)?;

    fs::write(&output, &container)?;
    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        data.len(),
        container.len()
    );
    Ok(())
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| decompressed_path(input));
    let container = fs::read(input)?;
    let data = lzwpack::decompress(&container)?;

    fs::write(&output, &data)?;
    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        container.len(),
        data.len()
    );
    Ok(())
}

/// Default compressed path: the input path with ".lzw" appended.
fn compressed_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".lzw");
    PathBuf::from(path)
}

/// Default decompressed path: strip a ".lzw" extension when present,
/// otherwise append "_uncompressed".
fn decompressed_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "lzw") {
        return input.with_extension("");
    }
    let mut path = input.as_os_str().to_owned();
    path.push("_uncompressed");
    PathBuf::from(path)
}
