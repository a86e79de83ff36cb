use clap::Parser;
use jot::cli::commands::Cli;
use jot::tui;
use jot::tui::app::Options;

fn main() {
    let cli = Cli::parse();

    let options = Options {
        seed_notes: cli.notes,
        dark: cli.dark,
        config_path: cli.config,
    };

    if let Err(e) = tui::run(options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
