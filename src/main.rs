//! CLI for bb84sim — run one round of the BB84 protocol and print the
//! per-phase transcript.

use bb84sim::protocols::bb84::{self, Bb84Config};
use bb84sim::{SampleSplit, report};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "bb84sim")]
#[command(about = "Simulate one round of BB84 key distribution over a tappable channel")]
#[command(version)]
struct Cli {
    /// Number of photons Alice transmits
    #[arg(long, default_value_t = 60)]
    length: usize,

    /// Number of sifted-key bits at the sample boundary
    #[arg(long, default_value_t = 10)]
    sample_size: usize,

    /// Which slice of the sifted key is publicly compared: the first
    /// sample-size bits (head) or everything after them (tail)
    #[arg(long, default_value = "tail", value_parser = ["head", "tail"])]
    sample_split: String,

    /// Probability that an eavesdropper intercepts the run
    #[arg(long, default_value_t = 0.5)]
    eve_probability: f64,

    /// Seed for a reproducible run; OS-seeded when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Bb84Config {
        length: cli.length,
        sample_size: cli.sample_size,
        sample_split: match cli.sample_split.as_str() {
            "head" => SampleSplit::Head,
            _ => SampleSplit::Tail,
        },
        eve_probability: cli.eve_probability,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match bb84::run(&config, &mut rng) {
        Ok(run) => print!("{}", report::render(&run)),
        Err(err) => {
            eprintln!("bb84sim: {err}");
            std::process::exit(1);
        }
    }
}
