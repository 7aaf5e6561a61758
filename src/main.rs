use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rusty_ecg::{ArrhythmiaDataset, Dataset, LoaderConfig, Split, SplitData};

/// Inspect an MIT-BIH arrhythmia data directory.
#[derive(Parser, Debug)]
#[command(name = "rusty-ecg", version, about, long_about = None)]
struct Cli {
    /// Directory containing mitbih_train.csv and mitbih_test.csv
    data_dir: PathBuf,

    /// JSON loader config (rescale parameters)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only check that the files exist, do not parse them
    #[arg(long)]
    lazy: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LoaderConfig::from_json_file(path)?,
        None => LoaderConfig::default(),
    };

    let dataset = ArrhythmiaDataset::with_config(&cli.data_dir, !cli.lazy, config)
        .with_context(|| format!("opening dataset in {}", cli.data_dir.display()))?;

    print!("{}", dataset.describe());
    println!("Directory: {}", dataset.directory_path().display());

    for split in Split::ALL {
        match dataset.split(split) {
            Some(data) => print_split(split, data),
            None => println!("{split}: not loaded ({})", dataset.path(split).display()),
        }
    }
    Ok(())
}

fn print_split(split: Split, data: &SplitData) {
    let counts = data
        .class_counts()
        .iter()
        .enumerate()
        .map(|(class, n)| format!("{class}={n}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{split}: {} samples, features {:?}, labels {:?}, classes [{counts}]",
        data.len(),
        data.features().shape(),
        data.labels().shape(),
    );
}
