//! kappa CLI — relation invariants from JSON relation files.
//!
//! With one relation: prints `kappa`. With two: prints `rel_dist_bound`.
//! Relations are JSON objects mapping row labels to objects mapping column
//! labels to 0/1 values; missing pairs fill with the per-relation default.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use kappa_rs::{KappaOptions, Relation, kappa, rel_dist_bound, relation_from_dict};

/// Calculates `kappa` of one relation or the relation distance bound between
/// two, per Kenneth P. Ewing, "Bounds for the Distance Between Relations"
/// (arXiv:2105.01690).
///
/// For sparse relation files, ensure every row and column label appears at
/// least once and set the defaults.
#[derive(Parser)]
#[command(name = "kappa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Filepath for the first relation (JSON).
    rel1: PathBuf,

    /// Filepath for the second relation (JSON). When present, the relation
    /// distance bound is computed instead of kappa.
    rel2: Option<PathBuf>,

    /// Default for sparse first relation.
    #[arg(long, default_value_t = 0)]
    def1: u8,

    /// Default for sparse second relation.
    #[arg(long, default_value_t = 0)]
    def2: u8,

    /// Capacity for kappa (one-relation mode only; 0 means unset).
    #[arg(short, long, default_value_t = 0, conflicts_with = "rel2")]
    max_count: usize,

    /// Check that relations are binary matrices.
    #[arg(short, long)]
    check_bin: bool,

    /// Display relation matrices before printing the result.
    #[arg(short, long)]
    display: bool,

    /// Print intermediate calculation state (-v: summaries, -vv: per-column).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn load_relation(path: &PathBuf, default: u8) -> Result<Relation> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading relation file {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("parsing JSON in {}", path.display()))?;
    let rel = relation_from_dict(&value, default)
        .with_context(|| format!("converting {} to a relation matrix", path.display()))?;
    Ok(rel)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let r1 = load_relation(&cli.rel1, cli.def1)?;
    if cli.display {
        println!("{r1}");
    }

    match &cli.rel2 {
        Some(rel2) => {
            let r2 = load_relation(rel2, cli.def2)?;
            if cli.display {
                println!("{r2}");
            }
            println!("{}", rel_dist_bound(&r1, &r2, cli.check_bin)?);
        }
        None => {
            let opts = KappaOptions {
                max_count: (cli.max_count > 0).then_some(cli.max_count),
                check_bin: cli.check_bin,
            };
            println!("{}", kappa(&r1, &opts)?);
        }
    }

    Ok(())
}
