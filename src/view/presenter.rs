use colored::Colorize;

use super::controller::ViewStateController;
use super::format::format_last_updated;
use crate::config::DisplaySettings;
use crate::domain::{Player, SortKey, SortSpec};

const TITLE: &str = "📊 Top 50 Jugadores - LNB Bot";
const UPDATED_LABEL: &str = "Última actualización";
const LOAD_FAILED: &str = "No se pudieron cargar las estadísticas.";

/// One clickable column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: SortKey,
    pub label: &'static str,
    pub indicator: Option<&'static str>,
}

impl HeaderCell {
    pub fn text(&self) -> String {
        match self.indicator {
            Some(arrow) => format!("{} {}", self.label, arrow),
            None => self.label.to_string(),
        }
    }
}

/// Header row for the given sort state, in column order
pub fn headers(spec: SortSpec) -> Vec<HeaderCell> {
    SortKey::ALL
        .into_iter()
        .map(|key| HeaderCell {
            key,
            label: key.label(),
            indicator: (key == spec.key).then(|| spec.direction.indicator()),
        })
        .collect()
}

/// Renders controller state as a text table. Holds no view state of its own.
#[derive(Debug, Clone)]
pub struct Presenter {
    settings: DisplaySettings,
}

impl Presenter {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    /// While an error is set nothing from the dataset is shown, its
    /// timestamp included.
    pub fn render(&self, view: &ViewStateController) -> String {
        let last_updated = match view.error() {
            Some(_) => None,
            None => view.last_updated(),
        };

        let mut lines = vec![
            self.paint_title(TITLE),
            format!(
                "{}: {}",
                UPDATED_LABEL,
                format_last_updated(last_updated, self.settings.not_available)
            ),
            String::new(),
        ];

        match view.error() {
            Some(err) => lines.push(self.paint_error(&format!("Error: {} ({})", LOAD_FAILED, err))),
            None => lines.extend(self.render_table(&headers(view.sort_spec()), &view.projection())),
        }

        lines.join("\n")
    }

    fn render_table(&self, header: &[HeaderCell], players: &[&Player]) -> Vec<String> {
        let rows: Vec<Vec<String>> = players.iter().map(|p| row_cells(p)).collect();
        let widths = column_widths(header, &rows);

        let header_line = header
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell.key, &cell.text(), *width))
            .collect::<Vec<_>>()
            .join("  ");

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(self.paint_title(header_line.trim_end()));
        lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));

        for row in &rows {
            let line = SortKey::ALL
                .iter()
                .zip(row)
                .zip(&widths)
                .map(|((key, cell), width)| pad(*key, cell, *width))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }

        lines
    }

    fn paint_title(&self, text: &str) -> String {
        if self.settings.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.settings.colored {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

fn row_cells(player: &Player) -> Vec<String> {
    SortKey::ALL
        .iter()
        .map(|key| match key.numeric_value(player) {
            Some(value) => value.to_string(),
            None => player.name.clone(),
        })
        .collect()
}

fn column_widths(header: &[HeaderCell], rows: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|text| text.chars().count())
                .chain(std::iter::once(cell.text().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad(key: SortKey, text: &str, width: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match key {
        SortKey::Name => format!("{}{}", text, fill),
        _ => format!("{}{}", fill, text),
    }
}
