use std::io::IsTerminal;
use std::sync::OnceLock;

use serde::Serialize;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

pub mod table;

use table::{Style, TableView};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

static TABLE_STYLE: OnceLock<Style> = OnceLock::new();

/// Resolve table colour and width once from the flags and environment.
pub fn init_style(flags: &GlobalFlags) {
    let style = resolve_style(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = TABLE_STYLE.set(style);
}

fn resolve_style(
    flags: &GlobalFlags,
    stdout_is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> Style {
    let table = flags.format == OutputFormat::Table;
    let color = table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_tty && !flags.quiet && !no_color,
        };
    let width = columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);
    Style { width, color }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let style = TABLE_STYLE.get().copied().unwrap_or_default();
            Ok(TableView::from_value(serde_json::to_value(value)?).render(style))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
