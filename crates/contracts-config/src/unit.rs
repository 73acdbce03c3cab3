use crate::error::{ConfigGenError, ConfigGenResult};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// System contracts compiled by default: (source, contract, output)
pub const DEFAULT_UNITS: [(&str, &str, &str); 5] = [
    ("./dpor/admission/admission.sol", "Admission", "./assets/config/admission.json"),
    ("./dpor/campaign4/campaign.sol", "Campaign", "./assets/config/campaign.json"),
    ("./dpor/rpt2/rpt.sol", "Rpt", "./assets/config/rpt.json"),
    ("./dpor/rnode2/rnode.sol", "Rnode", "./assets/config/rnode.json"),
    ("./reward2/reward.sol", "Reward", "./assets/config/reward.json"),
];

/// A single contract to compile and the file its config is written to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Source path, passed to the compiler verbatim
    #[serde(rename = "source")]
    pub source_path: String,
    /// Name of the contract within the source file
    #[serde(rename = "contract")]
    pub contract_name: String,
    /// Config file path
    #[serde(rename = "output")]
    pub output_path: PathBuf,
}

impl CompilationUnit {
    /// Creates a unit compiling `contract_name` from `source_path` into `output_path`
    pub fn new(
        source_path: impl Into<String>,
        contract_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            contract_name: contract_name.into(),
            output_path: output_path.into(),
        }
    }
}

/// Returns the built-in units, in compilation order
pub fn default_units() -> Vec<CompilationUnit> {
    DEFAULT_UNITS
        .iter()
        .map(|(source, contract, output)| CompilationUnit::new(*source, *contract, *output))
        .collect()
}

/// Loads units from a json manifest: an array of `{"source", "contract", "output"}` objects
pub fn load_units(path: impl AsRef<Path>) -> ConfigGenResult<Vec<CompilationUnit>> {
    let path = path.as_ref();
    let manifest_err =
        |inner: String| ConfigGenError::Manifest { path: path.to_path_buf(), inner };

    let data = fs::read(path).map_err(|e| manifest_err(e.to_string()))?;
    let units: Vec<CompilationUnit> =
        serde_json::from_slice(&data).map_err(|e| manifest_err(e.to_string()))?;
    if units.is_empty() {
        return Err(manifest_err("no units defined".into()));
    }

    Ok(units)
}
