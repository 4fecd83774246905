use sitegrab_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and run the pipeline.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("sitegrab error: {:#}", err);
        std::process::exit(1);
    }
}
