use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use rsa_vectors_core::{emsa, utils::to_prefixed_hex, EncodedMessage};

#[derive(Args, Debug)]
pub struct ParseCmd {
    /// The encoded message, `0x`-prefixed or bare hex.
    #[clap(long)]
    pub encoded: String,
}

impl ParseCmd {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let em =
            EncodedMessage::from_hex(&self.encoded).context("failed to read encoded message")?;
        let parsed = emsa::parse(em.as_bytes()).context("failed to parse encoded message")?;
        writeln!(out, "algorithm: {}", parsed.algorithm)?;
        writeln!(out, "digest: {}", to_prefixed_hex(&parsed.digest))?;
        writeln!(out, "padding: {}", parsed.padding_len)?;
        Ok(())
    }
}
