use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trasse_gen::{GenParams, generate, to_transport};

/// Batch road generator: builds voxel road maps and writes each one as a
/// JSON face list.
#[derive(Parser, Debug)]
#[command(name = "trasse", version, about)]
struct Args {
    /// Number of maps to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Lattice side, which is also the exact road length.
    #[arg(long, default_value_t = 100)]
    size: usize,
    /// Weight of the go-straight option; overrides the params file.
    #[arg(long)]
    linearity: Option<u32>,
    /// Weight of each climb option; overrides the params file.
    #[arg(long)]
    altitude_variation: Option<u32>,
    /// Optional TOML file with generation parameters.
    #[arg(long)]
    params: Option<PathBuf>,
    /// Output directory for the map files.
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Seed for a reproducible batch; fresh entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => GenParams::from_path(path)?,
        None => GenParams::default(),
    };
    if let Some(linearity) = args.linearity {
        params.linearity = linearity;
    }
    if let Some(altitude_variation) = args.altitude_variation {
        params.altitude_variation = altitude_variation;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    fs::create_dir_all(&args.out)?;
    log::info!(
        "generating {} map(s) of size {} into {}",
        args.count,
        args.size,
        args.out.display()
    );

    for i in 0..args.count {
        // a failed attempt is a normal outcome; keep trying with fresh
        // randomness until this map lands
        let mut attempts = 1u64;
        let road = loop {
            match generate(args.size, &params, &mut rng) {
                Some(road) => break road,
                None => attempts += 1,
            }
        };
        let json = serde_json::to_string(&to_transport(&road))?;
        let path = args.out.join(format!("map{i}.json"));
        fs::write(&path, json)?;
        log::info!(
            "map {} with {} segments written to {} after {} attempt(s)",
            i,
            road.len(),
            path.display(),
            attempts
        );
    }
    Ok(())
}
