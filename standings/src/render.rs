//! Template rendering for CLI output using outstanding

use std::str::FromStr;

use console::Style;
use outstanding::{render_auto, render_with_output, Theme};
use serde::Serialize;
use standingslib::{write_csv, Columns, Standings, StandingsTable};

/// Include template at compile time
const STANDINGS_TABLE_TEMPLATE: &str = include_str!("../templates/standings_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Row data for template rendering (pre-formatted)
#[derive(Debug, Serialize)]
struct TemplateRow {
    /// Pre-padded position (right-aligned)
    position: String,
    /// Pre-padded team name (left-aligned)
    team: String,
    /// Pre-padded value cells (right-aligned)
    cells: Vec<String>,
}

/// Data context for the standings table template
#[derive(Debug, Serialize)]
struct StandingsTableContext {
    title: Option<String>,
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    rows: Vec<TemplateRow>,
    footer: String,
    /// Warning lines, already prefixed
    warnings: Vec<String>,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold())
        .add("header", Style::new().bold())
        .add("warning", Style::new().yellow())
}

/// Column widths: the widest of header and values, per column.
fn column_widths(table: &StandingsTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        let cells = [row.position.to_string(), row.label.clone()]
            .into_iter()
            .chain(row.values.iter().cloned());
        for (i, cell) in cells.enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    widths
}

/// Build the template context; team names are left aligned, everything else
/// right aligned.
fn build_context(table: &StandingsTable) -> StandingsTableContext {
    let widths = column_widths(table);
    let width = |i: usize| widths.get(i).copied().unwrap_or(0);

    let header = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 1 {
                format!("{:<width$}", h, width = width(i))
            } else {
                format!("{:>width$}", h, width = width(i))
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let separator = "-".repeat(header.chars().count());

    let rows = table
        .rows
        .iter()
        .map(|row| TemplateRow {
            position: format!("{:>width$}", row.position, width = width(0)),
            team: format!("{:<width$}", row.label, width = width(1)),
            cells: row
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:>width$}", v, width = width(i + 2)))
                .collect(),
        })
        .collect();

    StandingsTableContext {
        title: table.title.clone(),
        header,
        separator,
        rows,
        footer: table.footer.clone(),
        warnings: table
            .warnings
            .iter()
            .map(|w| format!("warning: {}", w))
            .collect(),
    }
}

/// Render a standings table through the template.
pub fn render_table(table: &StandingsTable, output_mode: OutputMode) -> anyhow::Result<String> {
    let theme = create_theme();
    let context = build_context(table);
    render_with_output(STANDINGS_TABLE_TEMPLATE, &context, &theme, output_mode)
        .map_err(|e| anyhow::anyhow!("failed to render table: {e}"))
}

/// Render standings in the requested format.
///
/// `output_mode` decides styling of the table format (auto-detected
/// terminal, plain text, ...); JSON and CSV are never styled.
pub fn render(
    standings: &Standings,
    format: OutputFormat,
    columns: Columns,
    title: Option<&str>,
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            // Raw data, not the formatted table
            let theme = create_theme();
            let mut json =
                render_auto(STANDINGS_TABLE_TEMPLATE, standings, &theme, OutputMode::Json)
                    .map_err(|e| anyhow::anyhow!("failed to render JSON: {e}"))?;
            if !json.ends_with('\n') {
                json.push('\n');
            }
            Ok(json)
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, &standings.teams)?;
            Ok(String::from_utf8(buf)?)
        }
        OutputFormat::Table => {
            let mut table = StandingsTable::from_standings(standings, columns);
            if let Some(title) = title {
                table = table.with_title(title);
            }
            render_table(&table, output_mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standingslib::{BuildOptions, Fixture, Score, TableBuilder};

    fn sample() -> Standings {
        TableBuilder::new(BuildOptions::new()).build_fixtures(&[
            Fixture::new("1", "", "Arsenal FC", "Leeds United FC", Score::new(2, 1)),
            Fixture::new("2", "", "Leeds United FC", "Arsenal FC", Score::new(0, 0)),
        ])
    }

    fn text(standings: &Standings, columns: Columns, title: Option<&str>) -> String {
        render(
            standings,
            OutputFormat::Table,
            columns,
            title,
            OutputMode::Text,
        )
        .unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_build_context_pads_columns() {
        let table = StandingsTable::from_standings(&sample(), Columns::core());
        let context = build_context(&table);

        assert!(context.header.starts_with("Pos  Team           "));
        assert!(context.header.ends_with("GD  Pts"));
        assert_eq!(context.separator.len(), context.header.len());
        assert_eq!(context.rows[0].position, "  1");
        assert_eq!(context.rows[0].team, "Arsenal FC     ");
        assert_eq!(context.rows[0].cells[6], "+1");
        assert_eq!(context.rows[0].cells[7], "  4");
        assert!(context.warnings.is_empty());
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = text(&sample(), Columns::core(), None);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Pos"));
        assert!(lines[0].contains("Pts"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].starts_with("  1  Arsenal FC "));
        assert!(lines[2].ends_with("+1    4"));
        assert!(lines[3].starts_with("  2  Leeds United FC"));
        assert_eq!(lines.last(), Some(&"2 teams, 2 fixtures"));
    }

    #[test]
    fn test_render_text_with_title() {
        let text = text(&sample(), Columns::core(), Some("england 2020-21"));
        assert!(text.starts_with("england 2020-21"));
    }

    #[test]
    fn test_render_text_with_splits() {
        let text = text(&sample(), Columns::all(), None);
        assert!(text.contains("PPG"));
        assert!(text.contains("1-0-0 2:1"));
    }

    #[test]
    fn test_render_json_is_raw_standings() {
        let json = render(
            &sample(),
            OutputFormat::Json,
            Columns::core(),
            None,
            OutputMode::Auto,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fixture_count"], 2);
        assert_eq!(value["teams"][0]["team"], "Arsenal FC");
        assert_eq!(value["teams"][0]["points"], 4);
    }

    #[test]
    fn test_render_csv() {
        let csv = render(
            &sample(),
            OutputFormat::Csv,
            Columns::all(),
            None,
            OutputMode::Auto,
        )
        .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Arsenal FC,2,1,1,0,2,1,1,4");
    }
}
