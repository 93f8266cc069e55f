//! A max-flow solver that follows the output contract of the verifier.
//!
//! ```text
//! maxflow [--algorithm dinic|edmonds-karp] [--use-32-bit] <FILE>
//! ```
//!
//! Prints `Maximaler Fluss: <value>` and `Berechnungsdauer: <seconds> Sekunden`
//! on success. Every failure is printed to stderr and exits with code 1.

use std::{path::PathBuf, process::ExitCode};

use flow::prelude::*;

mod solve;

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
struct Args {
    path: PathBuf,

    #[arg(long, value_enum, default_value_t = MaxFlowAlgorithm::Dinic)]
    algorithm: MaxFlowAlgorithm,

    #[arg(long)]
    use_32_bit: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match <Args as clap::Parser>::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match solve::solve(&args.path, args.algorithm, args.use_32_bit) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", args.path.display());
            ExitCode::FAILURE
        }
    }
}
