use std::path::PathBuf;
use thiserror::Error;

pub type ConfigGenResult<T> = Result<T, ConfigGenError>;

/// Contract config generation errors
#[derive(Debug, Error)]
pub enum ConfigGenError {
    /// The compiler could not read or parse a source file
    #[error("failed to compile {path}: {inner}")]
    SourceRead {
        /// Source path as passed to the compiler
        path: String,
        /// The inner error message
        inner: String,
    },

    /// Compiler output has no entry for `<path>:<contractName>`
    #[error("contract {key} not found in compiler output")]
    ContractNotFound {
        /// The lookup key
        key: String,
    },

    /// Output file could not be created or written
    #[error("failed to write {}: {inner}", path.display())]
    OutputWrite {
        /// Output path
        path: PathBuf,
        /// The underlying io error
        #[source]
        inner: std::io::Error,
    },

    /// Compiler binary could not be invoked
    #[error("compiler error: {inner}")]
    Compiler {
        /// The inner error message
        inner: String,
    },

    /// Compiler produced output that could not be understood
    #[error("malformed compiler output: {inner}")]
    MalformedOutput {
        /// The inner error message
        inner: String,
    },

    /// Config could not be serialized to json
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unit manifest could not be loaded
    #[error("invalid unit manifest {}: {inner}", path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// The inner error message
        inner: String,
    },
}
