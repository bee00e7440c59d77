use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

use p256_precomputed::table::{OutputFormat, build_p256, render};

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    /// Rust source defining a `pub const` byte array
    Rust,
    /// Raw table bytes, no header
    Binary,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Rust => OutputFormat::Rust,
            Format::Binary => OutputFormat::Binary,
        }
    }
}

#[derive(Parser)]
#[command(name = "gen-p256-table")]
#[command(about = "Generate the P-256 fixed-base precomputed table", long_about = None)]
struct Cli {
    /// Destination file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// Name of the generated constant (rust format only)
    #[arg(short = 'n', long = "name", default_value = "P256_PRECOMPUTED")]
    name: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    eprintln!("  → Building P-256 table...");
    let table = build_p256()?;

    let contents = render(&table, cli.format.into(), &cli.name)?;
    std::fs::write(&cli.output, &contents)?;

    let params = table.params();
    eprintln!(
        "  → Wrote {} ({} groups × {} multiples, {} bytes)",
        cli.output.display(),
        params.groups,
        params.multiples,
        contents.len()
    );

    Ok(())
}
