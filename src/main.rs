use anyhow::Result;

use lnb_leaderboard::cli::{Cli, Command};
use lnb_leaderboard::config::AppConfig;
use lnb_leaderboard::{handle_browse, handle_completions, handle_serve, handle_show, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::new().with_colors(!cli.no_color);

    match &cli.command {
        Command::Show { url, search, sort } => {
            handle_show(config.with_public_url(url.clone()), search.as_deref(), sort)
        }
        Command::Browse { url } => handle_browse(config.with_public_url(url.clone())),
        Command::Serve { port, feed } => handle_serve(config, *port, feed),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
