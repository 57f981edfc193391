//! Completion banner and final file-path report.

use std::path::Path;

use colored::Colorize;
use log::warn;

use crate::bigtext;

/// Prints the `Done!` banner and the absolute path of the written file.
///
/// A rendering failure is not fatal: the diagnostic goes to stdout alongside
/// the rest of the program's output, and the path line is still printed
/// because the file is already on disk. The caller exits normally either way.
pub fn completed(path: &Path) {
    match bigtext::render("Done!") {
        Ok(art) => println!("{}", art.green()),
        Err(error) => {
            warn!("completion banner rendering failed: {error}");
            println!("Something went wrong...");
            println!("{error}");
        }
    }

    let line = format!("file created at {}", path.display());
    println!("{}", line.black().on_green().bold());
}
