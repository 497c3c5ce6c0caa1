use anyhow::{Context, Result};
use log::debug;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::DataSource;
use crate::domain::{Dataset, SortKey};
use crate::errors::LoadError;
use crate::view::{LoadTicket, Presenter, ViewStateController};

const HELP: &str = "Comandos:
  search <texto>   filtrar por nombre (sin texto: quitar filtro)
  sort <columna>   ordenar por columna (repetir para invertir)
  refresh          volver a cargar las estadísticas
  help             mostrar esta ayuda
  quit             salir";

/// A user event typed into the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Sort(SortKey),
    Refresh,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    match verb.to_lowercase().as_str() {
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "sort" | "o" => rest
            .parse::<SortKey>()
            .map(BrowseCommand::Sort)
            .map_err(|e| e.to_string()),
        "refresh" | "r" => Ok(BrowseCommand::Refresh),
        "help" | "h" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

type LoadFuture<'a> = Pin<Box<dyn Future<Output = Result<Dataset, LoadError>> + 'a>>;

/// A feed load in flight, stamped with the ticket it was started under
struct PendingLoad<'a> {
    ticket: LoadTicket,
    future: LoadFuture<'a>,
}

impl<'a> PendingLoad<'a> {
    fn start<S: DataSource>(ticket: LoadTicket, source: &'a S) -> Self {
        Self {
            ticket,
            future: Box::pin(source.load()),
        }
    }
}

/// Resolves with the in-flight load's outcome; never resolves when idle.
async fn finish(pending: &mut Option<PendingLoad<'_>>) -> (LoadTicket, Result<Dataset, LoadError>) {
    match pending {
        Some(load) => (load.ticket, load.future.as_mut().await),
        None => std::future::pending().await,
    }
}

/// Interactive leaderboard: every line of input is one user event, the
/// table is re-rendered after each one.
///
/// The feed load runs alongside input handling. Until it lands the empty
/// table is shown; a `refresh` replaces whatever load is still in flight.
pub struct BrowseSession<S: DataSource> {
    source: S,
    view: ViewStateController,
    presenter: Presenter,
}

impl<S: DataSource> BrowseSession<S> {
    pub fn new(source: S, presenter: Presenter) -> Self {
        Self {
            source,
            view: ViewStateController::new(),
            presenter,
        }
    }

    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    /// Runs until `quit`, or until input ends and no load is pending.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let Self {
            source,
            view,
            presenter,
        } = self;
        let source: &S = source;

        let mut in_flight = view
            .start_mount()
            .map(|ticket| PendingLoad::start(ticket, source));
        render(presenter, view, output)?;

        let mut lines = input.lines();
        let mut reading = true;

        while reading || in_flight.is_some() {
            tokio::select! {
                biased;

                (ticket, result) = finish(&mut in_flight) => {
                    in_flight = None;
                    if view.apply_load(ticket, result) {
                        render(presenter, view, output)?;
                    }
                }
                line = lines.next_line(), if reading => {
                    let Some(line) = line.context("Failed to read input")? else {
                        reading = false;
                        continue;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }

                    debug!("Handling {:?}", line);
                    match parse_command(&line) {
                        Ok(BrowseCommand::Quit) => break,
                        Ok(BrowseCommand::Help) => writeln!(output, "{}", HELP)?,
                        Ok(BrowseCommand::Refresh) => {
                            let ticket = view.start_refresh();
                            in_flight = Some(PendingLoad::start(ticket, source));
                            render(presenter, view, output)?;
                        }
                        Ok(BrowseCommand::Search(term)) => {
                            view.on_search_change(term);
                            render(presenter, view, output)?;
                        }
                        Ok(BrowseCommand::Sort(key)) => {
                            view.on_header_click(key);
                            render(presenter, view, output)?;
                        }
                        Err(message) => writeln!(output, "{}", message)?,
                    }
                }
            }
        }

        Ok(())
    }
}

fn render<W: Write>(presenter: &Presenter, view: &ViewStateController, output: &mut W) -> Result<()> {
    writeln!(output, "{}\n", presenter.render(view))?;
    output.flush()?;
    Ok(())
}
