use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rsa_vectors_core::TestVector;

#[derive(Args, Debug)]
pub struct CheckCmd {
    /// A JSON vector as written by `encode --format json`.
    #[clap(long)]
    pub path: PathBuf,
}

impl CheckCmd {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let vector = TestVector::from_json(&json).context("failed to parse test vector")?;
        vector
            .validate()
            .with_context(|| format!("invalid test vector {}", self.path.display()))?;
        tracing::info!("checked {} vector", vector.hash);
        writeln!(out, "ok")?;
        Ok(())
    }
}
