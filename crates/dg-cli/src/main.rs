//! Dungeon floor printer.
//!
//! Generates a multi-floor dungeon and writes each floor to stdout, one
//! character per tile, or as JSON for downstream tooling.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;

use dg_core::{FloorRng, FloorSpec, generate_floor};

/// Generate and print dungeon floors
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate and print dungeon floors", long_about = None)]
struct Args {
    /// Floor width in tiles
    #[arg(short = 'W', long, default_value_t = 80)]
    width: usize,

    /// Floor height in tiles
    #[arg(short = 'H', long, default_value_t = 21)]
    height: usize,

    /// Number of floors in the dungeon
    #[arg(short, long, default_value_t = 3)]
    floors: usize,

    /// Seed for the layout RNG (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit each floor as one JSON line instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dungen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut rng = match args.seed {
        Some(seed) => FloorRng::new(seed),
        None => FloorRng::from_entropy(),
    };

    if !args.json {
        println!(
            "{} floors of {}x{}, seed {}",
            args.floors,
            args.width,
            args.height,
            rng.seed()
        );
    }

    for floor in 0..args.floors {
        let spec = FloorSpec::new(floor, args.floors, args.width, args.height);
        let grid = generate_floor(&spec, &mut rng)?;

        if args.json {
            println!("{}", serde_json::to_string(&grid)?);
        } else {
            println!();
            println!("Floor {} of {}", floor + 1, args.floors);
            print!("{grid}");
        }
    }

    Ok(())
}
