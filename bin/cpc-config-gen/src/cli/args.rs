use clap::Parser;
use expanded_pathbuf::ExpandedPathBuf;

/// Contract config generation args
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Project root. Sources are compiled from here and relative output paths are resolved
    /// against it.
    #[clap(long, default_value = ".")]
    pub root: ExpandedPathBuf,

    /// Path to the solc binary.
    ///
    /// By default, `solc` is looked up on `PATH`.
    #[clap(long)]
    pub solc: Option<ExpandedPathBuf>,

    /// Json manifest of units to compile, replacing the built-in system contracts.
    ///
    /// Expected format: `[{"source": "...", "contract": "...", "output": "..."}]`
    #[clap(long)]
    pub units: Option<ExpandedPathBuf>,
}
