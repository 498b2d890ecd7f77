// src/main.rs
use anyhow::Result;
use clap::Parser;

use covsum::{Args, init_tracing, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}
