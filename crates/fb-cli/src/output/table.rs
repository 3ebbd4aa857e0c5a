//! Text tables for Freebird responses.
//!
//! A [`TableView`] is built from the JSON form of a response: a list of
//! records, a single record shown as key/value pairs, or a paginated list with
//! its position line. Column policy lives here: detail-only fields are left out
//! of list rows, and prose columns give up width before identifiers do.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Fields too long for a list row. `get` commands show them in full.
const DETAIL_ONLY: [&str; 7] = [
    "content",
    "longDescription",
    "galleryImages",
    "knowledgePoints",
    "resources",
    "featuredImage",
    "relatedProjectIds",
];

/// Free text that is truncated first on a narrow terminal.
const PROSE: [&str; 9] = [
    "title",
    "description",
    "overview",
    "excerpt",
    "subject",
    "message",
    "features",
    "tags",
    "value",
];

/// Prose columns keep at least this many characters.
const PROSE_FLOOR: usize = 8;
const GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

/// Terminal layout resolved from the global flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Total width to fit rows into. `None` leaves columns at natural width.
    pub width: Option<usize>,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
    placeholder: &'static str,
}

impl TableView {
    /// Pick the view for any serialized response.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::records(&items),
            Value::Object(map) => Self::page(&map).unwrap_or_else(|| Self::fields(map)),
            scalar => Self {
                headers: vec!["value".to_string()],
                rows: vec![vec![cell_text(&scalar)]],
                footer: None,
                placeholder: "",
            },
        }
    }

    /// One row per record with the union of summary columns in first-seen
    /// order. Non-object items render as a single `value` column.
    #[must_use]
    pub fn records(items: &[Value]) -> Self {
        if !items.iter().all(Value::is_object) {
            return Self {
                headers: vec!["value".to_string()],
                rows: items.iter().map(|item| vec![cell_text(item)]).collect(),
                footer: None,
                placeholder: "(no rows)",
            };
        }

        let mut headers: Vec<String> = Vec::new();
        for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
            if !DETAIL_ONLY.contains(&key.as_str()) && !headers.contains(key) {
                headers.push(key.clone());
            }
        }

        let rows = items
            .iter()
            .filter_map(Value::as_object)
            .map(|record| {
                headers
                    .iter()
                    .map(|header| {
                        record
                            .get(header)
                            .map_or_else(|| EMPTY_CELL.to_string(), cell_text)
                    })
                    .collect()
            })
            .collect();

        Self {
            headers,
            rows,
            footer: None,
            placeholder: if items.is_empty() { "(no rows)" } else { "(no columns)" },
        }
    }

    /// A single record as sorted `key`/`value` rows, every field included.
    #[must_use]
    pub fn fields(map: Map<String, Value>) -> Self {
        let mut rows: Vec<Vec<String>> = map
            .into_iter()
            .map(|(key, value)| vec![key, cell_text(&value)])
            .collect();
        rows.sort_by(|a, b| a[0].cmp(&b[0]));
        Self {
            headers: vec!["key".to_string(), "value".to_string()],
            rows,
            footer: None,
            placeholder: "(no fields)",
        }
    }

    /// `{items, total, currentPage, totalPages}` renders its items followed by
    /// a `page N of M (T total)` line.
    fn page(map: &Map<String, Value>) -> Option<Self> {
        if map.len() != 4 {
            return None;
        }
        let items = map.get("items")?.as_array()?;
        let current = map.get("currentPage")?.as_u64()?;
        let pages = map.get("totalPages")?.as_u64()?;
        let total = map.get("total")?.as_u64()?;

        let mut view = Self::records(items);
        view.footer = Some(format!("page {current} of {pages} ({total} total)"));
        Some(view)
    }

    #[must_use]
    pub fn render(&self, style: Style) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        if self.rows.is_empty() || self.headers.is_empty() {
            lines.push(self.placeholder.to_string());
        } else {
            let mut columns = self.measure();
            if let Some(width) = style.width {
                shrink_to(&mut columns, width);
            }

            let header_cells = columns
                .iter()
                .map(|column| pad(&clip(column.header, column.width), column.width, false));
            lines.push(header_cells.collect::<Vec<_>>().join(GAP).trim_end().to_string());

            let ruled = columns.iter().map(|c| c.width).sum::<usize>()
                + GAP.len() * columns.len().saturating_sub(1);
            lines.push("-".repeat(ruled));

            for row in &self.rows {
                let cells = columns.iter().zip(row).map(|(column, text)| {
                    let padded = pad(&clip(text, column.width), column.width, column.numeric);
                    match tone(column.header, text).filter(|_| style.color) {
                        Some(tone) => tone.paint(&padded),
                        None => padded,
                    }
                });
                lines.push(cells.collect::<Vec<_>>().join(GAP).trim_end().to_string());
            }
        }

        if let Some(footer) = &self.footer {
            lines.push(footer.clone());
        }
        lines.join("\n")
    }

    fn measure(&self) -> Vec<Column<'_>> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let cells = self.rows.iter().filter_map(|row| row.get(index));
                let widest = cells.clone().map(|text| text.chars().count()).max().unwrap_or(0);
                let mut filled = cells.filter(|text| text.as_str() != EMPTY_CELL).peekable();
                let numeric = filled.peek().is_some() && filled.all(|text| is_number(text));
                let header_width = header.chars().count();
                let floor = if PROSE.contains(&header.as_str()) {
                    header_width.max(PROSE_FLOOR)
                } else {
                    header_width
                };
                Column {
                    header,
                    width: widest.max(header_width),
                    floor,
                    numeric,
                    prose: PROSE.contains(&header.as_str()),
                }
            })
            .collect()
    }
}

struct Column<'a> {
    header: &'a str,
    width: usize,
    floor: usize,
    numeric: bool,
    prose: bool,
}

/// Narrow the widest prose column one character at a time until the row
/// fits, then the widest of the rest. No column drops below its floor.
fn shrink_to(columns: &mut [Column<'_>], budget: usize) {
    let gaps = GAP.len() * columns.len().saturating_sub(1);
    let natural = columns.iter().map(|c| c.width).sum::<usize>() + gaps;
    let mut overflow = natural.saturating_sub(budget);

    for prose_pass in [true, false] {
        while overflow > 0 {
            let Some(column) = columns
                .iter_mut()
                .filter(|c| c.prose == prose_pass && c.width > c.floor)
                .max_by_key(|c| c.width)
            else {
                break;
            };
            column.width -= 1;
            overflow -= 1;
        }
    }
}

fn clip(text: &str, width: usize) -> Cow<'_, str> {
    match text.char_indices().nth(width) {
        None => Cow::Borrowed(text),
        Some(_) if width == 0 => Cow::Borrowed(""),
        Some(_) => {
            let keep = text.char_indices().nth(width - 1).map_or(text.len(), |(at, _)| at);
            Cow::Owned(format!("{}…", &text[..keep]))
        }
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn is_number(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Positive,
    Highlight,
    Negative,
}

impl Tone {
    fn paint(self, text: &str) -> String {
        let code = match self {
            Self::Positive => 32,
            Self::Highlight => 33,
            Self::Negative => 31,
        };
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    }
}

/// Colour for a cell, judged by the column it sits in.
fn tone(column: &str, text: &str) -> Option<Tone> {
    match (column, text) {
        ("role", "admin") => Some(Tone::Positive),
        ("role", "subscriber") => Some(Tone::Highlight),
        ("subscriptionTier", "free") => Some(Tone::Negative),
        ("subscriptionTier", "starter" | "pro" | "enterprise") => Some(Tone::Highlight),
        ("isRead", "false") | ("isPremium" | "highlighted", "true") => Some(Tone::Highlight),
        ("isFeatured" | "isPublished", "true") | ("locked", "false") => Some(Tone::Positive),
        ("isPublished", "false") | ("locked", "true") => Some(Tone::Negative),
        _ => None,
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_CELL.to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        nested => nested.to_string(),
    }
}
