use clap::Parser;

use seaway_cli::settings::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Err(e) = seaway_cli::run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
