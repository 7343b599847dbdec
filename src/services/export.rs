use crate::domain::models::{AnalysisArtifact, AnalysisResult, ModelInputs};
use std::path::Path;

/// Write the results artifact next to the inputs that produced it.
///
/// Callers treat a failure here as a warning: the printed report must not
/// be lost because the artifact could not be written.
pub fn export_results(
    path: &Path,
    inputs: &ModelInputs,
    results: &AnalysisResult,
) -> anyhow::Result<()> {
    let artifact = AnalysisArtifact {
        inputs: inputs.clone(),
        results: results.clone(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&artifact)?)?;
    Ok(())
}
