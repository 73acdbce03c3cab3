use clap::{value_parser, Parser};

pub mod args;
pub mod commands;

/// The contract config generator CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "CPChain contract config generator", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(flatten)]
    command: commands::GenerateCommand,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }

    /// Log filter for the generator crates, appended to `RUST_LOG` when set
    pub fn log_filter(&self, rust_log: Option<&str>) -> String {
        let level = self.get_log_level();
        let directives = format!("cpc_config_gen={level},cpc_contracts_config={level}");
        match rust_log {
            Some(val) if !val.is_empty() => format!("{val},{directives}"),
            _ => directives,
        }
    }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();

    let rust_log = cli.log_filter(std::env::var("RUST_LOG").ok().as_deref());
    std::env::set_var("RUST_LOG", rust_log);
    tracing_subscriber::fmt::init();

    cli.command.execute()
}
