mod cli;
mod extract_cmd;
mod logging;
mod summary_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = if cli.summary {
        summary_cmd::run(cli.file.as_deref())
    } else {
        extract_cmd::run(cli.file.as_deref())
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
