//! Terminal output.
//!
//! In `--json` mode only [`Output::json`] and errors reach the terminal, so
//! stdout stays machine-readable. Status lines go to stderr.

use console::{style, StyledObject};
use pods_quote::Money;

/// Width of the label column in price breakdowns.
const PRICE_LABEL_WIDTH: usize = 28;
const PRICE_AMOUNT_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Human { verbose: bool },
    Json,
}

#[derive(Clone, Copy)]
enum Status {
    Info,
    Success,
    Warn,
}

impl Status {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Status::Info => style("i").cyan(),
            Status::Success => style("ok").green(),
            Status::Warn => style("!").yellow(),
        }
    }
}

/// Prints command results in human or JSON form.
#[derive(Debug, Clone)]
pub struct Output {
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json { Mode::Json } else { Mode::Human { verbose } };
        Self { mode }
    }

    fn human(&self) -> bool {
        matches!(self.mode, Mode::Human { .. })
    }

    fn status(&self, status: Status, msg: &str) {
        if !self.human() {
            return;
        }
        match status {
            Status::Warn => eprintln!("{} {}", status.marker(), msg),
            _ => println!("{} {}", status.marker(), msg),
        }
    }

    pub fn info(&self, msg: &str) {
        self.status(Status::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(Status::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(Status::Warn, msg);
    }

    /// Errors are reported in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Human { .. } => eprintln!("{} {}", style("error:").red().bold(), msg),
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.is_verbose() {
            eprintln!("{}", style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.human() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("could not serialize output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.human() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.human() {
            println!("  - {}", item);
        }
    }

    /// Columns padded to `widths`; the last column is not padded.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if !self.human() {
            return;
        }
        let mut line = String::from(" ");
        for (i, col) in cols.iter().enumerate() {
            line.push(' ');
            match widths.get(i) {
                Some(width) if i + 1 < cols.len() => {
                    line.push_str(&format!("{:<width$} ", col, width = width))
                }
                _ => line.push_str(col),
            }
        }
        println!("{}", line.trim_end());
    }

    /// Breakdown line with the amount right-aligned.
    pub fn price(&self, label: &str, amount: Money) {
        if self.human() {
            println!(
                "  {:<lw$}{:>aw$}",
                label,
                amount.display(),
                lw = PRICE_LABEL_WIDTH,
                aw = PRICE_AMOUNT_WIDTH
            );
        }
    }

    pub fn total(&self, label: &str, amount: Money) {
        if self.human() {
            println!(
                "  {:<lw$}{:>aw$}",
                style(label).bold(),
                style(amount.display()).bold().green(),
                lw = PRICE_LABEL_WIDTH,
                aw = PRICE_AMOUNT_WIDTH
            );
        }
    }

    /// Raw text, e.g. a composed enquiry message.
    pub fn text(&self, text: &str) {
        if self.human() {
            println!("{}", text);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.mode == Mode::Human { verbose: true }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_is_never_verbose() {
        let out = Output::new(true, true);
        assert!(out.is_json());
        assert!(!out.is_verbose());
    }

    #[test]
    fn test_human_mode_flags() {
        let out = Output::new(true, false);
        assert!(!out.is_json());
        assert!(out.is_verbose());
        assert!(!Output::new(false, false).is_verbose());
    }
}
