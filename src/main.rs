use anyhow::Result;
use clap::Parser;

use devsurvey::{
    Logging, PROJECT_NAME, PROJECT_VERSION, banner, catalog::Catalog, notify, store, survey,
    tui::TuiBackend,
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
struct UserArgs {
    /// Verbose (log to the console instead of the log file)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_verbose(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

fn main() -> Result<()> {
    let args = UserArgs::parse();
    init_logging(args.verbose)?;

    banner::welcome()?;

    let catalog = Catalog::new();
    let mut backend = TuiBackend::new();
    let response = survey::run(&catalog, &mut backend)?;

    let path = store::save(&response)?;
    notify::completed(&path);

    Ok(())
}
