//! sky-bake: bakes a seeded star dome to JSON.
//!
//! The app serves the starfield over IPC, but a frontend can also ship
//! the buffer pre-baked. This tool produces the same dome the engine
//! would generate for a given seed.
//!
//! Usage:
//!   sky-bake generate --seed 42 --output starfield.json
//!   sky-bake generate --count 500 --radius 60 --output demo_sky.json

use std::path::PathBuf;
use std::process;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use b612_core::constants::{STARFIELD_COUNT, STARFIELD_RADIUS};
use b612_sky::Starfield;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sky-bake: B612 star dome baking tool\n\
         \n\
         Commands:\n\
         \n\
         generate  Bake a seeded star dome to JSON\n\
         \n\
           --seed <N>      RNG seed (default: 42)\n\
           --count <N>     Number of stars (default: 3000)\n\
           --radius <R>    Dome radius in scene units (default: 100)\n\
           --output <path> Output JSON file path (required)\n\
         \n\
         Examples:\n\
         \n\
           sky-bake generate --seed 42 --output starfield.json\n\
           sky-bake generate --count 500 --radius 60 --output demo_sky.json\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
            eprintln!("Error: {flag} expects an integer, got '{}'", args[i + 1]);
            process::exit(1);
        }
    }
    default
}

fn parse_usize(args: &[String], flag: &str, default: usize) -> usize {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<usize>() {
                return n;
            }
            eprintln!("Error: {flag} expects an integer, got '{}'", args[i + 1]);
            process::exit(1);
        }
    }
    default
}

fn parse_f32(args: &[String], flag: &str, default: f32) -> f32 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<f32>() {
                return v;
            }
            eprintln!("Error: {flag} expects a number, got '{}'", args[i + 1]);
            process::exit(1);
        }
    }
    default
}

fn parse_output(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

// --- Generate command ---

fn cmd_generate(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let count = parse_usize(args, "--count", STARFIELD_COUNT);
    let radius = parse_f32(args, "--radius", STARFIELD_RADIUS);

    let output = match parse_output(args) {
        Some(p) => p,
        None => {
            eprintln!("Error: --output <path> is required");
            process::exit(1);
        }
    };

    eprintln!("Baking {count} stars on a radius-{radius} dome (seed {seed})...");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let starfield = Starfield::generate(count, radius, &mut rng);

    let json = match serde_json::to_string(&starfield) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing starfield: {e}");
            process::exit(1);
        }
    };

    match std::fs::write(&output, &json) {
        Ok(()) => {
            eprintln!("Done! Output: {} ({} bytes)", output.display(), json.len());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", output.display());
            process::exit(1);
        }
    }
}
