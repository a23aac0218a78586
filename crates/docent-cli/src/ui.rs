//! Terminal preferences resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process environment says about the terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal<'a> {
    is_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: Terminal<'_>) -> Self {
        let table = flags.format == OutputFormat::Table;
        let interactive = terminal.is_tty && table && !flags.quiet;
        let table_color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => interactive && !terminal.no_color,
        };
        let term_width = terminal
            .columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);
        Self {
            table_color,
            progress: interactive,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let terminal = Terminal {
        is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: columns.as_deref(),
    };
    let prefs = UiPrefs::resolve(flags, terminal);
    tracing::trace!(?prefs, "terminal preferences");
    let _ = UI_PREFS.set(prefs);
}

/// Plain output until [`init`] has run.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Terminal, UiPrefs};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
        }
    }

    const TTY: Terminal<'static> = Terminal {
        is_tty: true,
        no_color: false,
        columns: None,
    };

    #[test]
    fn auto_colors_interactive_tables() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto), TTY);
        assert!(prefs.table_color);
        assert!(prefs.progress);
    }

    #[test]
    fn auto_respects_no_color_and_pipes() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        let no_color = Terminal { no_color: true, ..TTY };
        assert!(!UiPrefs::resolve(&table, no_color).table_color);
        assert_eq!(UiPrefs::resolve(&table, Terminal::default()), UiPrefs::default());
    }

    #[test]
    fn always_colors_tables_only() {
        let piped = Terminal::default();
        assert!(UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Always), piped).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always), TTY).table_color);
    }

    #[test]
    fn quiet_hides_progress() {
        let mut quiet = flags(OutputFormat::Table, ColorMode::Auto);
        quiet.quiet = true;
        let prefs = UiPrefs::resolve(&quiet, TTY);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn narrow_or_garbled_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        let width = |columns| UiPrefs::resolve(&table, Terminal { columns: Some(columns), ..TTY }).term_width;
        assert_eq!(width("120"), Some(120));
        assert_eq!(width("39"), None);
        assert_eq!(width("wide"), None);
    }
}
