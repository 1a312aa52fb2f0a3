//! CLI for generating sample test data.
//!
//! Usage:
//!   # Three seeded orders as pretty JSON
//!   autofake --type order --count 3 --seed 42 --pretty
//!
//!   # Unseeded order items to a file
//!   autofake --type order-item --count 10 --output items.json

use autofake::{catalog, write_json, Batch, Value};
use clap::Parser;
use std::fs::File;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "autofake")]
#[command(about = "Generate seeded structural test data as JSON", long_about = None)]
struct Args {
    /// Sample type: order, order-item, product, quantity, discount, status
    #[arg(short = 't', long = "type", default_value = "order")]
    type_name: String,

    /// Number of cases to generate
    #[arg(short, long, default_value = "1")]
    count: usize,

    /// Seed for reproducible output (omit for random data)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let ty = catalog::descriptor_for(&args.type_name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown type '{}'. Valid options: {}",
            args.type_name,
            catalog::TYPES.join(", ")
        )
    })?;
    let registry = catalog::registry();

    let mut batch = Batch::new(args.count)?;
    if let Some(seed) = args.seed {
        batch = batch.seed(seed);
    }
    // The Order graph carries an abstract Calculator member; bind it so the
    // sample catalog generates out of the box.
    batch = batch.configure(|config| {
        config.override_type("Calculator", |_| Value::Str("standard-calculator".to_string()))
    });

    let cases = batch.produce(&ty, &registry)?;

    if let Some(ref path) = args.output {
        let file = File::create(path)?;
        write_json(file, &cases, args.pretty)?;
        eprintln!("Generated {} {} case(s) to {}", cases.len(), args.type_name, path);
    } else {
        let stdout = io::stdout();
        write_json(stdout.lock(), &cases, args.pretty)?;
        println!();
    }

    Ok(())
}
