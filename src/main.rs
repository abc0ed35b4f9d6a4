//! id3boosts CLI entry point.
//!
//! Reads a sample file, prints the induced ID3 tree and
//! the leave-one-out accuracy.

use clap::Parser;
use id3boosts::prelude::*;
use id3boosts::errors::Id3Error;
use id3boosts::weak_learner::decision_tree::{entropy, importance};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "id3boosts")]
#[command(about = "Grow an ID3 decision tree and measure its leave-one-out accuracy")]
#[command(version)]
struct Cli {
    /// Sample file: a header line, then `<values...> yes|no` per line
    #[arg(default_value = "data/weather.txt")]
    file: PathBuf,

    /// Seed of the random source used by stuck predictions
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Show debug logs and one line per held-out row
    #[arg(short, long)]
    verbose: bool,

    /// Print the aggregated table before the tree
    #[arg(long)]
    table: bool,

    /// Print the information gain of every attribute at the root
    #[arg(long)]
    gains: bool,

    /// Also write the tree as a Graphviz file
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Print the accuracy report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    id3boosts::logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> id3boosts::Result<()> {
    let dataset = SampleReader::new().file(&cli.file).read()?;

    if cli.table {
        println!("{dataset}");
    }

    if cli.gains {
        print_gains(&dataset);
    }

    let tree = DecisionTreeBuilder::new(&dataset).build();
    if cli.verbose {
        println!("{tree}");
    }
    let f = tree.produce(&dataset);
    print!("{f}");

    if let Some(path) = &cli.dot {
        f.to_dot_file(path).map_err(|source| Id3Error::FileAccess {
            path: path.clone(),
            source,
        })?;
    }

    let accuracy = LeaveOneOut::new(&dataset)
        .seed(cli.seed)
        .verbose(cli.verbose)
        .run(&tree);

    if cli.json {
        let report = serde_json::to_string_pretty(&accuracy)
            .map_err(std::io::Error::from)?;
        println!("{report}");
    } else {
        println!("{accuracy}");
    }
    Ok(())
}

fn print_gains(dataset: &Dataset) {
    let schema = dataset.schema();
    if schema.is_empty() {
        println!("no attribute to rank\n");
        return;
    }
    let ranking = importance(dataset, schema.attributes());

    println!("{:<16} {:>10} {:>10}", "attribute", "gain", "entropy");
    for (name, score) in ranking.iter().rev() {
        let unweighted = schema
            .index_of(name)
            .map(|index| entropy::value_entropy_sum(index, dataset))
            .unwrap_or_default();
        println!("{name:<16} {:>10} {unweighted:>10.6}", score.to_string());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["id3boosts"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("data/weather.txt"));
        assert_eq!(cli.seed, 1234);
        assert!(!cli.verbose && !cli.table && !cli.gains && !cli.json);
        assert!(cli.dot.is_none());
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "id3boosts",
            "tests/dataset/weather.txt",
            "--seed",
            "7",
            "--verbose",
            "--table",
            "--gains",
            "--dot",
            "tree.dot",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("tests/dataset/weather.txt"));
        assert_eq!(cli.seed, 7);
        assert!(cli.verbose && cli.table && cli.gains && cli.json);
        assert_eq!(cli.dot, Some(PathBuf::from("tree.dot")));
    }

    #[test]
    fn rejects_a_bad_seed() {
        assert!(Cli::try_parse_from(["id3boosts", "--seed", "abc"]).is_err());
    }
}
