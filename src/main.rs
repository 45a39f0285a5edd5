use clap::Parser;
use column_filters::presentation::ui::Cli;
use column_filters::{init_logging, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
