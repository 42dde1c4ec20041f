//! Manifest I/O for imposition plans

use super::plan::ImpositionPlan;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Save the plan as pretty-printed JSON.
///
/// The manifest is written to a sibling `.partial` file first and renamed
/// into place, so a failed write never leaves a truncated manifest at `path`.
pub async fn save_manifest(plan: &ImpositionPlan, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(plan)?;
    let partial = partial_path(path);

    if let Err(e) = tokio::fs::write(&partial, &bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    log::info!(
        "Wrote manifest for {} sheets to {}",
        plan.sheets.len(),
        path.display()
    );
    Ok(())
}

/// Load a plan saved with [`save_manifest`]
pub async fn load_manifest(path: impl AsRef<Path>) -> Result<ImpositionPlan> {
    let bytes = tokio::fs::read(path).await?;
    let plan = serde_json::from_slice(&bytes)?;
    Ok(plan)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path_is_sibling() {
        let partial = partial_path(Path::new("/tmp/out/plan.json"));
        assert_eq!(partial, PathBuf::from("/tmp/out/plan.json.partial"));
    }
}
