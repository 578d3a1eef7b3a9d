//! Configen CLI
//!
//! Generates configuration constants from a mapping file and a value source.

use clap::Parser;
use configen::{init_tracing, run, GenerateOptions};

fn main() {
    init_tracing();
    let options = GenerateOptions::parse();

    if let Err(err) = run(&options) {
        eprintln!("error[{}]: {err}", err.code());
        std::process::exit(1);
    }
}
