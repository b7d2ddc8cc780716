use std::io;

use anyhow::Result;
use clap::Parser;
use rsa_vectors_cli::{Cli, Commands};
use rsa_vectors_core::utils::setup_logger;

fn main() -> Result<()> {
    setup_logger();

    let mut stdout = io::stdout().lock();
    match Cli::parse().into_command() {
        Commands::Encode(cmd) => cmd.run(&mut stdout),
        Commands::Verify(cmd) => cmd.run(&mut stdout),
        Commands::Parse(cmd) => cmd.run(&mut stdout),
        Commands::Check(cmd) => cmd.run(&mut stdout),
    }
}
