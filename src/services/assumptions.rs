use crate::domain::models::{AssumptionsFile, ModelInputs};
use std::path::PathBuf;

/// Load model assumptions, mirroring how config overrides work elsewhere:
/// an explicit `--assumptions` file must parse; otherwise the default
/// config path is consulted and a missing file means built-in defaults.
pub fn load_assumptions(explicit: Option<&str>) -> anyhow::Result<ModelInputs> {
    let path = match explicit {
        Some(p) => PathBuf::from(p),
        None => match default_assumptions_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ModelInputs::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("cannot read assumptions file {}: {e}", path.display()))?;
    let file: AssumptionsFile = toml::from_str(&raw)?;
    Ok(file.model)
}

fn default_assumptions_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/afairhome/assumptions.toml"))
}

#[cfg(test)]
mod tests {
    use super::load_assumptions;

    #[test]
    fn explicit_override_keeps_unlisted_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("assumptions.toml");
        std::fs::write(&path, "[model]\nadoption_rate = 0.10\n").expect("write assumptions");
        let inputs = load_assumptions(Some(path.to_str().unwrap())).expect("load");
        assert_eq!(inputs.adoption_rate, 0.10);
        assert_eq!(inputs.eligible_households, 10_000.0);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load_assumptions(Some("/nonexistent/assumptions.toml")).is_err());
    }
}
