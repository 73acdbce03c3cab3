use crate::error::{ConfigGenError, ConfigGenResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process::Command,
    sync::OnceLock,
};
use tracing::{debug, warn};

/// Builds the `<path>:<contractName>` key compiler output is indexed by
pub fn contract_key(source_path: &str, contract_name: &str) -> String {
    format!("{source_path}:{contract_name}")
}

/// Per contract compiler result. Fields other than `abi` and `bin` are dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Interface description, as emitted by the compiler
    pub abi: Value,
    /// Hex encoded bytecode
    pub bin: String,
}

/// Compiler output indexed by `<path>:<contractName>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilerOutput {
    contracts: HashMap<String, ContractArtifact>,
}

impl CompilerOutput {
    /// Creates an empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `artifact` under `key`, replacing any previous entry
    pub fn insert(&mut self, key: impl Into<String>, artifact: ContractArtifact) {
        self.contracts.insert(key.into(), artifact);
    }

    /// Returns the artifact stored under `key`
    pub fn get(&self, key: &str) -> Option<&ContractArtifact> {
        self.contracts.get(key)
    }

    /// Removes and returns the artifact stored under `key`
    pub fn take(&mut self, key: &str) -> Option<ContractArtifact> {
        self.contracts.remove(key)
    }

    /// Number of contracts in the output
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Parses solc `--combined-json abi,bin` output.
    ///
    /// Older solc releases emit `abi` as a json encoded string, newer ones as an array; both are
    /// decoded into the structured value.
    pub fn from_combined_json(data: &[u8]) -> ConfigGenResult<Self> {
        #[derive(Deserialize)]
        struct CombinedJson {
            contracts: HashMap<String, ContractArtifact>,
        }

        let combined: CombinedJson = serde_json::from_slice(data)
            .map_err(|e| ConfigGenError::MalformedOutput { inner: e.to_string() })?;

        let mut contracts = HashMap::with_capacity(combined.contracts.len());
        for (key, mut artifact) in combined.contracts {
            if let Value::String(abi) = &artifact.abi {
                artifact.abi = serde_json::from_str(abi).map_err(|e| {
                    ConfigGenError::MalformedOutput { inner: format!("abi of {key}: {e}") }
                })?;
            }
            contracts.insert(key, artifact);
        }

        Ok(Self { contracts })
    }
}

impl FromIterator<(String, ContractArtifact)> for CompilerOutput {
    fn from_iter<I: IntoIterator<Item = (String, ContractArtifact)>>(iter: I) -> Self {
        Self { contracts: iter.into_iter().collect() }
    }
}

/// Compiles source files into [CompilerOutput]
pub trait Compiler {
    /// Compiles all contracts in `sources`
    fn compile_files(&self, sources: &[&str]) -> ConfigGenResult<CompilerOutput>;
}

impl<F> Compiler for F
where
    F: Fn(&[&str]) -> ConfigGenResult<CompilerOutput>,
{
    fn compile_files(&self, sources: &[&str]) -> ConfigGenResult<CompilerOutput> {
        self(sources)
    }
}

/// Solc backed [Compiler], invoking `solc --combined-json abi,bin`
#[derive(Debug)]
pub struct SolcCompiler {
    solc: ethers_solc::Solc,
    working_dir: PathBuf,
    version_logged: OnceLock<()>,
}

impl SolcCompiler {
    /// Creates a compiler running `solc` from `PATH` inside `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::with_binary("solc", working_dir)
    }

    /// Creates a compiler running the given solc binary inside `working_dir`.
    ///
    /// A relative binary path with a directory part is resolved against the current directory,
    /// since the compiler process itself runs inside `working_dir`. Bare names are looked up on
    /// `PATH`.
    pub fn with_binary(solc: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            solc: ethers_solc::Solc::new(resolve_binary(solc.into())),
            working_dir: working_dir.into(),
            version_logged: OnceLock::new(),
        }
    }

    /// Path of the solc binary
    pub fn binary(&self) -> &Path {
        &self.solc.solc
    }

    /// Directory solc runs in
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn log_version(&self) {
        self.version_logged.get_or_init(|| {
            let solc = self.binary().display();
            match self.solc.version() {
                Ok(version) => debug!(%solc, %version, "Using solc"),
                Err(err) => warn!(%solc, "Could not probe solc version: {err}"),
            }
        });
    }
}

fn resolve_binary(solc: PathBuf) -> PathBuf {
    if solc.is_relative() && solc.components().count() > 1 {
        std::path::absolute(&solc).unwrap_or(solc)
    } else {
        solc
    }
}

impl Compiler for SolcCompiler {
    fn compile_files(&self, sources: &[&str]) -> ConfigGenResult<CompilerOutput> {
        self.log_version();
        debug!(?sources, working_dir = %self.working_dir.display(), "Compiling sources");

        let output = Command::new(self.binary())
            .current_dir(&self.working_dir)
            .args(["--combined-json", "abi,bin"])
            .args(sources)
            .output()
            .map_err(|e| ConfigGenError::Compiler {
                inner: format!("failed to run {}: {e}", self.binary().display()),
            })?;

        if !output.status.success() {
            return Err(ConfigGenError::SourceRead {
                path: sources.join(", "),
                inner: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        CompilerOutput::from_combined_json(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_combined_json_with_array_abi() -> eyre::Result<()> {
        let data = br#"{
            "contracts": {
                "./a.sol:Foo": {"abi": [{"type": "function", "name": "f"}], "bin": "6001600101"}
            },
            "version": "0.8.19+commit.7dd6d404.Linux.g++"
        }"#;
        let output = CompilerOutput::from_combined_json(data)?;
        assert_eq!(output.len(), 1);
        assert_eq!(
            output.get("./a.sol:Foo"),
            Some(&ContractArtifact {
                abi: json!([{"type": "function", "name": "f"}]),
                bin: "6001600101".into(),
            })
        );
        Ok(())
    }

    #[test]
    fn parse_combined_json_with_string_abi() -> eyre::Result<()> {
        let data = br#"{
            "contracts": {
                "a.sol:Foo": {
                    "abi": "[{\"constant\":true,\"name\":\"f\",\"type\":\"function\"}]",
                    "bin": "60806040",
                    "bin-runtime": "6080"
                }
            }
        }"#;
        let output = CompilerOutput::from_combined_json(data)?;
        let artifact = output.get("a.sol:Foo").expect("artifact should be present");
        assert_eq!(artifact.abi, json!([{"constant": true, "name": "f", "type": "function"}]));
        assert_eq!(artifact.bin, "60806040");
        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            CompilerOutput::from_combined_json(b"Error: not json"),
            Err(ConfigGenError::MalformedOutput { .. })
        ));
        let bad_abi = br#"{"contracts": {"a.sol:A": {"abi": "[", "bin": ""}}}"#;
        assert!(matches!(
            CompilerOutput::from_combined_json(bad_abi),
            Err(ConfigGenError::MalformedOutput { .. })
        ));
    }

    #[test]
    fn closures_are_compilers() -> eyre::Result<()> {
        let compiler = |sources: &[&str]| -> ConfigGenResult<CompilerOutput> {
            Ok(sources
                .iter()
                .map(|s| {
                    (contract_key(s, "A"), ContractArtifact { abi: json!([]), bin: String::new() })
                })
                .collect())
        };
        let output = compiler.compile_files(&["x.sol"])?;
        assert!(output.get("x.sol:A").is_some());
        Ok(())
    }

    #[test]
    fn relative_binary_is_made_absolute() -> eyre::Result<()> {
        let compiler = SolcCompiler::with_binary("./tools/solc", "/srv/contracts");
        assert_eq!(compiler.binary(), std::env::current_dir()?.join("tools/solc"));

        let compiler = SolcCompiler::with_binary("solc-0.4.25", "/srv/contracts");
        assert_eq!(compiler.binary(), Path::new("solc-0.4.25"));

        let compiler = SolcCompiler::with_binary("/usr/bin/solc", "/srv/contracts");
        assert_eq!(compiler.binary(), Path::new("/usr/bin/solc"));
        Ok(())
    }

    #[test]
    fn missing_solc_binary() {
        let dir = tempfile::tempdir().expect("tempdir");
        let compiler = SolcCompiler::with_binary(dir.path().join("no-such-solc"), dir.path());
        assert!(matches!(
            compiler.compile_files(&["a.sol"]),
            Err(ConfigGenError::Compiler { .. })
        ));
    }
}
