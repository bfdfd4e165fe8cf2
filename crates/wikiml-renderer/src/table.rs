//! Table blocks.
//!
//! ```text
//! {| class="wide"
//! |+ Caption
//! ! Name !! Value
//! |- style="color: red"
//! | a || align="right" | 1
//! |}
//! ```
//!
//! A table runs from a line starting with `{|` to the next line starting with
//! `|}`. Inside it, `|-` starts a row (optional before the first one), `|+`
//! sets the caption and `|`/`!` lines hold data/header cells. Several cells may
//! share a line, separated by `||` or `!!`. Nested tables are not supported.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::attrs::{parse_attributes, render_attributes};

static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\{\|([^\n]*)\n((?s:.*?))^\|\}").unwrap());

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Data,
    Header,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Data => "td",
            Self::Header => "th",
        }
    }
}

#[derive(Debug)]
struct Cell {
    kind: CellKind,
    attrs: String,
    content: String,
}

impl Cell {
    /// Cell text is `attrs | content` or just `content`.
    fn parse(kind: CellKind, text: &str) -> Self {
        let (attrs, content) = match text.split_once('|') {
            Some((attrs, content)) => (render_attributes(&parse_attributes(attrs)), content),
            None => (String::new(), text),
        };
        Self {
            kind,
            attrs,
            content: content.trim().to_owned(),
        }
    }

    fn html(&self) -> String {
        let tag = self.kind.tag();
        format!("<{tag}{}>{}</{tag}>", self.attrs, self.content)
    }
}

#[derive(Debug, Default)]
struct Row {
    attrs: String,
    cells: Vec<Cell>,
}

/// Position and kind of the next inline cell separator.
fn next_separator(s: &str) -> Option<(usize, CellKind)> {
    let data = s.find("||").map(|pos| (pos, CellKind::Data));
    let header = s.find("!!").map(|pos| (pos, CellKind::Header));
    [data, header].into_iter().flatten().min_by_key(|(pos, _)| *pos)
}

/// Split a cell line into cells. The line starts with `|` or `!`.
fn split_cells(kind: CellKind, line: &str) -> Vec<Cell> {
    let lead = if kind == CellKind::Header { '!' } else { '|' };
    let mut rest = &line[1..];
    // `|| a` and `!! a` open a line the same way `| a` does
    if let Some(stripped) = rest.strip_prefix(lead) {
        rest = stripped;
    }

    let mut cells = Vec::new();
    let mut kind = kind;
    while let Some((pos, next_kind)) = next_separator(rest) {
        cells.push(Cell::parse(kind, &rest[..pos]));
        rest = &rest[pos + 2..];
        kind = next_kind;
    }
    cells.push(Cell::parse(kind, rest));
    cells
}

/// Build one table from the text after `{|` and the lines before `|}`.
///
/// # Example
///
/// ```
/// use wikiml_renderer::build_table;
///
/// assert_eq!(
///     build_table(r#" class="wide""#, "| a || b\n"),
///     "<table class=\"wide\">\n<tr>\n<td>a</td>\n<td>b</td>\n</tr>\n</table>"
/// );
/// ```
#[must_use]
pub fn build_table(table_start: &str, body: &str) -> String {
    let table_start = table_start.strip_prefix("{|").unwrap_or(table_start);

    let mut prelude = Vec::new();
    let mut caption = None;
    let mut rows: Vec<Row> = Vec::new();
    let mut current: Option<Row> = None;

    for line in body.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("|+") {
            caption = Some(rest.trim().to_owned());
        } else if let Some(rest) = line.strip_prefix("|-") {
            rows.extend(current.take());
            current = Some(Row {
                attrs: render_attributes(&parse_attributes(rest)),
                cells: Vec::new(),
            });
        } else if line.starts_with('|') || line.starts_with('!') {
            let kind = if line.starts_with('!') {
                CellKind::Header
            } else {
                CellKind::Data
            };
            current
                .get_or_insert_with(Row::default)
                .cells
                .extend(split_cells(kind, line));
        } else if let Some(cell) = current.as_mut().and_then(|row| row.cells.last_mut()) {
            cell.content.push('\n');
            cell.content.push_str(line);
        } else {
            prelude.push(line.to_owned());
        }
    }
    rows.extend(current);

    let mut out = prelude;
    out.push(format!(
        "<table{}>",
        render_attributes(&parse_attributes(table_start))
    ));
    if let Some(caption) = caption {
        out.push(format!("<caption>{caption}</caption>"));
    }
    for row in rows.iter().filter(|row| !row.cells.is_empty()) {
        out.push(format!("<tr{}>", row.attrs));
        out.extend(row.cells.iter().map(Cell::html));
        out.push("</tr>".to_owned());
    }
    out.push("</table>".to_owned());

    tracing::trace!(rows = rows.len(), "Built table");
    BLANK_LINES.replace_all(&out.join("\n"), "\n").into_owned()
}

/// Replace every table block in `text` with its HTML.
#[must_use]
pub fn build_tables(text: &str) -> String {
    TABLE
        .replace_all(text, |caps: &Captures| build_table(&caps[1], &caps[2]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_table() {
        assert_eq!(
            build_table("", "| a\n"),
            "<table>\n<tr>\n<td>a</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_full_table() {
        let body = "|+ Caption\n! A !! B\n|-\n| 1 || 2\n|- style=\"x\"\n| 3 || align=\"right\" | 4\n";
        assert_eq!(
            build_table(r#" class="wide" border="1""#, body),
            "<table class=\"wide\" border=\"1\">\n\
             <caption>Caption</caption>\n\
             <tr>\n<th>A</th>\n<th>B</th>\n</tr>\n\
             <tr>\n<td>1</td>\n<td>2</td>\n</tr>\n\
             <tr style=\"x\">\n<td>3</td>\n<td align=\"right\">4</td>\n</tr>\n\
             </table>"
        );
    }

    #[test]
    fn test_leading_row_marker_is_optional() {
        assert_eq!(
            build_table("", "|-\n| a\n"),
            build_table("", "| a\n")
        );
    }

    #[test]
    fn test_one_cell_per_line() {
        assert_eq!(
            build_table("", "! h\n| a\n| b\n"),
            "<table>\n<tr>\n<th>h</th>\n<td>a</td>\n<td>b</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_leading_double_delimiter() {
        assert_eq!(
            build_table("", "|| a || b\n"),
            "<table>\n<tr>\n<td>a</td>\n<td>b</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_mixed_separators_pick_cell_kind() {
        assert_eq!(
            build_table("", "! h || d !! h2\n"),
            "<table>\n<tr>\n<th>h</th>\n<td>d</td>\n<th>h2</th>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_continuation_line_joins_cell() {
        assert_eq!(
            build_table("", "| first\nsecond\n"),
            "<table>\n<tr>\n<td>first\nsecond</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_empty_rows_skipped() {
        assert_eq!(
            build_table("", "|-\n|-\n| a\n|-\n"),
            "<table>\n<tr>\n<td>a</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn test_build_tables_in_text() {
        assert_eq!(
            build_tables("before\n{| border=1\n| x\n|}\nafter"),
            "before\n<table border=\"1\">\n<tr>\n<td>x</td>\n</tr>\n</table>\nafter"
        );
    }

    #[test]
    fn test_unterminated_table_left_alone() {
        let text = "{|\n| x\n";
        assert_eq!(build_tables(text), text);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(build_tables("{|\n|}"), "<table>\n</table>");
    }
}
