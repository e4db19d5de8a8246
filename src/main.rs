use clap::Parser;
use rumba::cli::Cli;
use rumba::commands::run_report;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_report(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
