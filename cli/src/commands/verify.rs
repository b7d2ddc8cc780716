use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use rsa_vectors_core::{emsa, utils::VectorOpts, EncodedMessage, HashAlgorithm, FIXTURE_MESSAGE};

#[derive(Args, Debug)]
pub struct VerifyCmd {
    /// The encoded message, `0x`-prefixed or bare hex.
    #[clap(long)]
    pub encoded: String,

    #[clap(long, default_value = FIXTURE_MESSAGE)]
    pub message: String,

    #[clap(long, help = "Hash algorithm [default: sha512]")]
    pub hash: Option<HashAlgorithm>,
}

impl VerifyCmd {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let hash = self.hash.unwrap_or_else(|| VectorOpts::default().hash);
        let em =
            EncodedMessage::from_hex(&self.encoded).context("failed to read encoded message")?;
        emsa::verify(hash, self.message.as_bytes(), em.as_bytes())
            .with_context(|| format!("{hash} verification failed"))?;
        tracing::info!("verified {} byte encoding", em.len());
        writeln!(out, "ok")?;
        Ok(())
    }
}
