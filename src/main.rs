use anyhow::Result;
use clap::Parser;
use tracing::error;

use webtools::commands;
use webtools::utils::{setup_logging, validate_args};
use webtools::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match commands::run(&args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end_matches('\n'));
            }
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
