use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the project data directory (used for the log file), creating it
/// if needed.
///
/// Returns: Path to `~/.local/share/devsurvey` (or platform equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!(
            "Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"
        )
    })?;

    let project_data_dir = data_dir.join(PROJECT_NAME);
    fs::create_dir_all(&project_data_dir)
        .with_context(|| format!("Unable to create directory: {}", project_data_dir.display()))?;

    Ok(project_data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_data_dir_ends_with_project_name() {
        let dir = project_data_dir().unwrap();
        assert!(dir.ends_with(PROJECT_NAME));
        assert!(dir.is_dir());
    }
}
