use crate::cli::args::GenerateArgs;
use cpc_contracts_config::{
    default_units, load_units, CompilationUnit, Compiler, ConfigGenerator, SolcCompiler,
};
use std::path::PathBuf;
use tracing::info;

/// Resolves the units to compile: the manifest if given, the built-in system contracts otherwise
pub fn resolve_units(args: &GenerateArgs) -> eyre::Result<Vec<CompilationUnit>> {
    match &args.units {
        Some(path) => {
            info!("Loading compilation units from {:?}", path.to_path_buf());
            Ok(load_units(path.to_path_buf())?)
        }
        None => Ok(default_units()),
    }
}

/// Builds the solc compiler rooted at `args.root`
pub fn solc_compiler(args: &GenerateArgs) -> SolcCompiler {
    let root = args.root.to_path_buf();
    match &args.solc {
        Some(solc) => SolcCompiler::with_binary(solc.to_path_buf(), root),
        None => SolcCompiler::new(root),
    }
}

/// Generates configs for every unit with the given compiler, returning the written paths
pub fn generate_with<C: Compiler>(
    args: &GenerateArgs,
    compiler: C,
    units: &[CompilationUnit],
) -> eyre::Result<Vec<PathBuf>> {
    let root = args.root.to_path_buf();
    info!(units = units.len(), root = %root.display(), "Generating contract configs");

    let written = ConfigGenerator::new(compiler).with_root(root).run(units)?;

    info!("Generated {} contract configs", written.len());
    Ok(written)
}

/// Compiles all units with solc and writes their configs
pub fn generate_configs(args: GenerateArgs) -> eyre::Result<Vec<PathBuf>> {
    let units = resolve_units(&args)?;
    let compiler = solc_compiler(&args);
    info!(solc = %compiler.binary().display(), "Compiler");

    generate_with(&args, compiler, &units)
}
