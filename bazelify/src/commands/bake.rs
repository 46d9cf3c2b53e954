use std::path::PathBuf;

use bazelify_core::ConversionMode;
use bazelify_manifest::BazelifyToml;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, bake::BakeOptions},
    reports::{BakeResult, Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to bazelify.toml (defaults to ./bazelify.toml)
    #[arg(short, long, default_value = "bazelify.toml")]
    pub config: PathBuf,

    /// Output root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Conversion mode (overrides bazelify.toml setting)
    #[arg(short, long)]
    pub mode: Option<ConversionMode>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the preview as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let bazelify_toml = BazelifyToml::open(&self.config).unwrap_or_exit();
        let manifest = bazelify_toml.manifest();

        // Use CLI flag if provided, otherwise use manifest setting
        let mode = self.mode.unwrap_or(manifest.output.mode);

        let report = ops::bake(
            manifest,
            BakeOptions {
                output_dir: &self.output,
                mode,
                dry_run: self.dry_run,
            },
        )?;

        if self.json
            && let BakeResult::Preview(preview) = &report.result
        {
            let json = serde_json::to_string_pretty(&preview.files)
                .wrap_err("Failed to serialize preview")?;
            println!("{}", json);
            return Ok(());
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
