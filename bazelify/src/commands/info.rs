use std::path::PathBuf;

use bazelify_manifest::BazelifyToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to bazelify.toml (defaults to ./bazelify.toml)
    #[arg(short, long, default_value = "bazelify.toml")]
    pub config: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let bazelify_toml = BazelifyToml::open(&self.config).unwrap_or_exit();

        let report = ops::info(bazelify_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
