use super::args::GenerateArgs;
use crate::generate::generate_configs;
use clap::Parser;

/// Compile the system contracts and write their configs
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// All generation args
    #[clap(flatten)]
    pub generate: GenerateArgs,
}

impl GenerateCommand {
    /// Execute the command
    pub fn execute(self) -> eyre::Result<()> {
        generate_configs(self.generate).map(|_| ())
    }
}
