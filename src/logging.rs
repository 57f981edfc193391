//! File-backed logging so stray log lines never corrupt the prompts.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    verbose: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes log output to a file in the project data directory instead of
    /// the console. The file is truncated on every run.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Lowers the filter to debug level.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();

        if self.verbose {
            b.filter_level(LevelFilter::Debug);
        } else {
            b.filter_level(LevelFilter::Info);
        }

        if let Some(file_name) = &self.file_name {
            let log_file = project_data_dir()?.join(file_name);
            let fd = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;
            b.target(Target::Pipe(Box::new(fd)));
        }

        b.init();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_default_is_quiet_console() {
        let logging = Logging::new();
        assert!(!logging.verbose);
        assert!(logging.file_name.is_none());
    }

    #[test]
    fn test_logging_with_file() {
        let logging = Logging::new().with_file("test.log");
        assert_eq!(logging.file_name.unwrap().to_string_lossy(), "test.log");
    }

    #[test]
    fn test_logging_builder_chaining() {
        let logging = Logging::new().with_file("app.log").with_verbose(true);
        assert!(logging.verbose);
        assert!(logging.file_name.is_some());
    }
}
