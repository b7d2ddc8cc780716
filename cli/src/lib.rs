pub mod commands;

use clap::{Parser, Subcommand};

use crate::commands::{
    check::CheckCmd, encode::EncodeCmd, parse::ParseCmd, verify::VerifyCmd,
};

#[derive(Parser)]
#[command(
    name = "rsa-vectors",
    author,
    version,
    about = "EMSA-PKCS1-v1_5 known-answer vectors for RSA verifier circuits.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(flatten)]
    pub encode: EncodeCmd,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the EMSA-PKCS1-v1_5 encoding of a message digest.
    Encode(EncodeCmd),
    /// Check an encoded message against a message.
    Verify(VerifyCmd),
    /// Print the algorithm and digest carried by an encoded message.
    Parse(ParseCmd),
    /// Check a JSON test vector for internal consistency.
    Check(CheckCmd),
}

impl Cli {
    /// The subcommand to run, falling back to encoding when none is given.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Encode(self.encode))
    }
}
