pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod http;
pub mod services;
pub mod view;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::HttpFeedSource;
use crate::config::AppConfig;
use crate::domain::SortKey;
use crate::services::browse::BrowseSession;
use crate::services::server::ServerService;
use crate::view::{Presenter, ViewStateController};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn current_thread_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

pub fn handle_show(config: AppConfig, search: Option<&str>, sort: &[String]) -> Result<()> {
    let clicks = sort
        .iter()
        .map(|column| column.parse::<SortKey>())
        .collect::<Result<Vec<_>, _>>()?;

    let source = HttpFeedSource::from_settings(&config.feed)?;
    let mut view = ViewStateController::new();

    current_thread_runtime()?.block_on(view.mount(&source));

    if let Some(term) = search {
        view.on_search_change(term);
    }
    for key in clicks {
        view.on_header_click(key);
    }

    println!("{}", Presenter::new(config.display).render(&view));
    Ok(())
}

pub fn handle_browse(config: AppConfig) -> Result<()> {
    let source = HttpFeedSource::from_settings(&config.feed)?;
    let mut session = BrowseSession::new(source, Presenter::new(config.display));

    current_thread_runtime()?.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        session.run(stdin, &mut stdout).await
    })
}

pub fn handle_serve(mut config: AppConfig, port: u16, feed: &str) -> Result<()> {
    config.server.port = port;
    config.server.feed_file = feed.to_string();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(&config.server, &config.feed);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
