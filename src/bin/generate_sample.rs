use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rusty_ecg::{Split, NUM_CLASSES, SEQUENCE_LENGTH};

/// Write a synthetic mitbih_train.csv / mitbih_test.csv pair.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about, long_about = None)]
struct Args {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = "sample_data")]
    out: PathBuf,

    /// Training beats to write
    #[arg(long, default_value_t = 500)]
    train: usize,

    /// Test beats to write
    #[arg(long, default_value_t = 100)]
    test: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn gaussian(t: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(t - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// (center, width, amplitude) of the P, QRS and T waves per beat class,
/// in timesteps. Classes differ in QRS width and wave placement.
fn class_waves(class: usize) -> [(f64, f64, f64); 3] {
    match class {
        0 => [(20.0, 6.0, 0.15), (40.0, 3.0, 1.0), (80.0, 10.0, 0.3)],
        1 => [(10.0, 5.0, 0.12), (30.0, 3.0, 0.95), (70.0, 9.0, 0.3)],
        2 => [(20.0, 6.0, 0.02), (45.0, 9.0, 1.0), (95.0, 14.0, -0.4)],
        3 => [(20.0, 6.0, 0.1), (42.0, 6.0, 0.8), (85.0, 12.0, 0.1)],
        _ => [(15.0, 8.0, 0.3), (38.0, 5.0, 0.7), (75.0, 16.0, 0.5)],
    }
}

/// One beat scaled to [0, 1] and zero padded after a random length,
/// as in the published beat files.
fn generate_beat(class: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let waves = class_waves(class);
    let jitter = rng.gauss(0.0, 2.0);
    let mut beat: Vec<f64> = (0..SEQUENCE_LENGTH)
        .map(|i| {
            let t = i as f64;
            let signal: f64 = waves
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(t, mu + jitter, sigma, amp))
                .sum();
            signal + rng.gauss(0.0, 0.01)
        })
        .collect();

    let (min, max) = beat
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = (max - min).max(1e-12);
    for v in &mut beat {
        *v = (*v - min) / range;
    }

    let active = 120 + (rng.next_u64() % (SEQUENCE_LENGTH as u64 - 120)) as usize;
    for v in &mut beat[active..] {
        *v = 0.0;
    }
    beat
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_split(path: &Path, rows: usize, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for i in 0..rows {
        let class = i % NUM_CLASSES;
        let mut record: Vec<String> = generate_beat(class, rng)
            .iter()
            .map(|v| format!("{v:.18e}"))
            .collect();
        record.push(format!("{:.18e}", class as f64));
        writer
            .write_record(&record)
            .with_context(|| format!("writing row {i} of {}", path.display()))?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    for (split, rows) in [(Split::Train, args.train), (Split::Test, args.test)] {
        let path = args.out.join(split.file_name());
        write_split(&path, rows, &mut rng)?;
        log::info!("wrote {rows} {split} beats to {}", path.display());
    }

    println!(
        "Wrote {} train and {} test beats ({SEQUENCE_LENGTH} samples each) to {}",
        args.train,
        args.test,
        args.out.display()
    );
    Ok(())
}
