use super::types::{ProfileHistory, PROFILE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default profile file path (~/.config/disha/profile.json)
pub fn get_profile_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("profile.json"))
}

/// Load the profile history from a JSON file
///
/// If the file doesn't exist, returns an empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_profile(path: &Path) -> Result<ProfileHistory> {
    if !path.exists() {
        return Ok(ProfileHistory::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open profile file at {}", path.display()))?;

    let history: ProfileHistory =
        serde_json::from_reader(file).context("Failed to load profile history")?;

    if history.version != PROFILE_VERSION {
        anyhow::bail!("Unsupported profile version: {}", history.version);
    }

    Ok(history)
}

/// Save the profile history to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_profile(path: &Path, history: &ProfileHistory) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, history).context("Failed to serialize profile")?;

    file.commit().context("Failed to save profile")?;

    tracing::debug!(
        path = %path.display(),
        records = history.quiz_results.len(),
        colleges = history.saved_colleges.len(),
        "saved profile"
    );

    Ok(())
}
