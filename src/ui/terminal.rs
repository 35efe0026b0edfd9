//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LintTheme, OutputMode, UserInterface};

/// Terminal UI implementation. Reports go to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LintTheme,
    mode: OutputMode,
    color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_color(mode, should_use_colors())
    }

    /// Create a terminal UI with colors explicitly enabled or disabled.
    pub fn with_color(mode: OutputMode, color: bool) -> Self {
        let theme = if color {
            LintTheme::new()
        } else {
            LintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn report(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn use_color(&self) -> bool {
        self.color
    }
}
