//! fibseq - CLI

use anyhow::Result;
use clap::Parser;
use fibseq::{run, util::logger, RunConfig, NAME, VERSION};

/// Print the first 10 Fibonacci numbers
#[derive(Parser, Debug)]
#[command(name = "fibseq")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RunConfig::default().with_verbose(args.verbose);

    logger::init_with_level(config.log_level);

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}
