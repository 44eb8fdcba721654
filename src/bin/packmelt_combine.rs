//! packmelt-combine: Merge item-model JSON across resource-pack archives
//!
//! Usage:
//!   # Fully interactive (prompts for archives, types, output directory)
//!   packmelt-combine
//!
//!   # Everything on the command line
//!   packmelt-combine pack_a.zip pack_b.zip --types bow,sword -o ./combined
//!
//!   # Isolated extraction directory
//!   packmelt-combine pack.zip -t sword -o ./combined --work-dir ./tmp

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use packmelt::{combine_packs, CombineConfig};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "packmelt-combine")]
#[command(about = "Merge item-model JSON across resource-pack archives", long_about = None)]
struct Args {
    /// Resource-pack ZIP archives, in merge order (prompted for if omitted)
    #[arg(value_name = "ARCHIVE")]
    archives: Vec<PathBuf>,

    /// Comma-separated item types, e.g. bow,sword,axe (prompted for if omitted)
    #[arg(long, short = 't', value_delimiter = ',')]
    types: Vec<String>,

    /// Directory for the combined_<type>.json files (prompted for if omitted)
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Directory archives are extracted under (default: system temp dir)
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Comma-separated list keys to overwrite instead of append
    /// (default: rotation,translation,scale)
    #[arg(long, value_delimiter = ',')]
    overwrite_keys: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Anything missing from the command line is collected interactively
    let archives: Vec<PathBuf> = if args.archives.is_empty() {
        split_list(&prompt(
            "Enter the paths to the ZIP files of the resource packs separated by commas: ",
        )?)
        .into_iter()
        .map(PathBuf::from)
        .collect()
    } else {
        args.archives
    };

    let raw_types = if args.types.is_empty() {
        split_list(&prompt(
            "Enter the types of JSON files separated by commas (e.g., bow, sword, axe, pickaxe, hoe, shovel): ",
        )?)
    } else {
        args.types
    };
    let item_types: Vec<String> = raw_types
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => PathBuf::from(prompt("Enter the output directory path: ")?),
    };

    // Build config
    let mut config = CombineConfig::default();
    if let Some(work_dir) = args.work_dir {
        config.work_dir = work_dir;
    }
    if let Some(keys) = args.overwrite_keys {
        config.overwrite_keys = keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
    }

    let summaries = combine_packs(&archives, &item_types, &output_dir, config)?;
    for summary in &summaries {
        println!(
            "{}: merged {} archive(s), skipped {}, wrote {}",
            summary.item_type,
            summary.merged,
            summary.skipped,
            summary.output.display()
        );
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
