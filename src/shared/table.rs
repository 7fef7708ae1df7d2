//! Fixed-width table rendering for terminal output.
//!
//! Cell widths are measured in display columns, so wide (e.g. CJK) characters
//! in repository and gist descriptions stay aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A table column. `width: None` means the column is printed as-is, which is
/// only sensible for the last column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub header: &'a str,
    pub width: Option<usize>,
}

impl<'a> Column<'a> {
    pub fn fixed(header: &'a str, width: usize) -> Self {
        Self {
            header,
            width: Some(width),
        }
    }

    pub fn flexible(header: &'a str) -> Self {
        Self {
            header,
            width: None,
        }
    }
}

/// Render a header line plus one line per row, columns separated by two spaces.
/// Trailing whitespace is stripped from every line.
pub fn render(columns: &[Column<'_>], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();

    std::iter::once(&headers)
        .chain(rows)
        .map(|cells| {
            let line = columns
                .iter()
                .zip(cells)
                .map(|(column, cell)| {
                    let cell = single_line(cell);
                    match column.width {
                        Some(width) => fit_to_width(&cell, width),
                        None => cell,
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        })
        .collect()
}

/// Keeps at most `max_width` display columns of `s`.
///
/// ```
/// use ghdesk::shared::table::truncate_to_width;
/// assert_eq!(truncate_to_width("octocat/hello", 7), "octocat");
/// assert_eq!(truncate_to_width("日本語", 5), "日本");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max_width
        })
        .collect()
}

/// Pads `s` with spaces to exactly `width` display columns, or cuts it and
/// marks the cut with "..." when there is room for the marker.
///
/// ```
/// use ghdesk::shared::table::fit_to_width;
/// assert_eq!(fit_to_width("gist", 6), "gist  ");
/// assert_eq!(fit_to_width("octocat/hello", 10), "octocat...");
/// ```
pub fn fit_to_width(s: &str, width: usize) -> String {
    let display_width = s.width();
    if display_width <= width {
        return format!("{s}{}", " ".repeat(width - display_width));
    }
    if width < 3 {
        return truncate_to_width(s, width);
    }

    let kept = truncate_to_width(s, width - 3);
    // A wide char that did not fit leaves a one-column gap to fill.
    let gap = width - 3 - kept.width();
    format!("{kept}...{}", " ".repeat(gap))
}

/// Collapse newlines and tabs so a cell never breaks the table layout.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
