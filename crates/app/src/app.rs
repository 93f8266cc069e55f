use std::path::PathBuf;

use flow::prelude::*;

mod generate;
mod run;
mod solve;
mod verify;

pub(crate) type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

fn main() -> Result<()> {
    let args = <Args as clap::Parser>::parse();

    let filter = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let all_correct = match args.command {
        Command::Generate { config } => generate::generate(config).map(|_| true)?,
        Command::Verify { config } => verify::verify(config)?,
        Command::Solve { path, algorithm, use_32_bit } => {
            print!("{}", solve::solve(&path, algorithm, use_32_bit)?);
            true
        }
        Command::Run { config } => run::run(&config)?,
    };

    if !all_correct {
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about, propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// More output per occurrence, `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Generates random flow networks annotated with their maximum flow.
    Generate {
        #[command(flatten)]
        config: GenerateConfig,
    },
    /// Runs solver executables on annotated files and compares the results.
    Verify {
        #[command(flatten)]
        config: VerifyConfig,
    },
    /// Computes the maximum flow of a DIMACS file, like the `maxflow` binary.
    Solve {
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = MaxFlowAlgorithm::Dinic)]
        algorithm: MaxFlowAlgorithm,

        #[arg(long)]
        use_32_bit: bool,
    },
    /// Runs the generate and verify tasks of a JSON configuration file.
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}
