#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.trim_end().chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = format_cell(&truncated, *width, numeric);
                if options.color {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_COLUMN: usize = 4;

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        // Shrink the widest column that is still above its floor.
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Pads by character count, so multi-byte cells stay aligned.
fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(value.chars().count()));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Color a padded cell by the status word it holds.
fn colorize_status(cell: &str) -> String {
    let lower = cell.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "healthy" | "good" | "stable" | "low" | "info" | "decreasing" => Some("32"),
        "warning" | "fair" | "medium" | "recurring" | "new" => Some("33"),
        "needs-attention" | "poor" | "high" | "error" | "increasing" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableOptions {
        TableOptions {
            max_width: None,
            color: false,
        }
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_text("Drawer sizing", 7), "Drawer…");
        assert_eq!(truncate_text("Modal", 7), "Modal");
        assert_eq!(truncate_text("Modal", 1), "…");
    }

    #[test]
    fn numeric_cells_are_right_aligned() {
        let table = render_entity_table(
            &["component", "questions"],
            &[vec!["Drawer".into(), "8".into()]],
            plain(),
        );
        let row = table.lines().nth(2).expect("row line");
        assert!(row.ends_with("        8"));
    }

    #[test]
    fn dash_alone_is_not_numeric() {
        assert!(!looks_numeric("-"));
        assert!(looks_numeric("2.6"));
    }

    #[test]
    fn fits_to_max_width() {
        let rows = vec![vec!["x".repeat(60), "y".repeat(60)]];
        let table = render_entity_table(
            &["left", "right"],
            &rows,
            TableOptions {
                max_width: Some(50),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 50));
    }

    #[test]
    fn status_words_are_colored() {
        assert_eq!(colorize_status("healthy "), "\u{1b}[32mhealthy \u{1b}[0m");
        assert_eq!(colorize_status("Drawer"), "Drawer");
    }
}
