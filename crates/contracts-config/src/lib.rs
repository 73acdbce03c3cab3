//! Compiles CPChain system contracts and writes their ABI and bytecode into json config files
//! loaded by the node.

pub mod compiler;
mod config;
mod error;
pub mod format;
mod generator;
pub mod report;
mod unit;

pub use compiler::{contract_key, Compiler, CompilerOutput, ContractArtifact, SolcCompiler};
pub use config::{write_config, ContractConfig};
pub use error::{ConfigGenError, ConfigGenResult};
pub use generator::ConfigGenerator;
pub use report::{NoopReporter, Reporter, TracingReporter};
pub use unit::{default_units, load_units, CompilationUnit, DEFAULT_UNITS};
