//! Persists the collected answers as pretty-printed JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use log::info;

use crate::error::SurveyError;
use crate::response::SurveyResponse;
use crate::tui::Progress;

/// Destination file, relative to the working directory at invocation time.
pub const OUTPUT_FILE: &str = "data.json";

/// Simulated latency shown behind the saving indicator.
const SAVE_DELAY: Duration = Duration::from_secs(2);

/// Serializes the response as 2-space-indented JSON and writes it to `path`,
/// unconditionally overwriting any existing file.
///
/// The write is a single full-text write, so a failure leaves no partial
/// state behind. Returns the absolute path of the written file.
pub fn write_results(response: &SurveyResponse, path: &Path) -> Result<PathBuf> {
    let json =
        serde_json::to_string_pretty(response).context("Unable to serialize survey response")?;

    fs::write(path, json).map_err(SurveyError::Persistence)?;
    let absolute = fs::canonicalize(path).map_err(SurveyError::Persistence)?;

    info!("survey results written to {}", absolute.display());
    Ok(absolute)
}

/// Saves the response to `./data.json` behind the saving indicator.
///
/// Blocks for a fixed short delay before the write; nothing else is
/// scheduled during the wait.
pub fn save(response: &SurveyResponse) -> Result<PathBuf> {
    let progress = Progress::new("Saving data...").start();
    thread::sleep(SAVE_DELAY);

    match write_results(response, Path::new(OUTPUT_FILE)) {
        Ok(path) => {
            progress.success("Data saved!");
            Ok(path)
        }
        Err(error) => {
            progress.fail(format!("{error}"));
            Err(error)
        }
    }
}
