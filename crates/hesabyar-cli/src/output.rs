// Output formatting and styling

use colored::Colorize;
use hesabyar_core::view::LOADING_MESSAGE;
use hesabyar_core::View;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Styling with colors forced off, for pipes and tests
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn label(&self, label: &str) -> String {
        if self.use_colors {
            label.bold().to_string()
        } else {
            label.to_string()
        }
    }

    /// Render a view to terminal text
    ///
    /// Field values pass through untouched; only labels and glyphs are
    /// added around them.
    pub fn render_view(&self, view: &View) -> String {
        match view {
            View::Idle => String::new(),
            View::Loading => self.info(LOADING_MESSAGE),
            View::Table { explanation } => {
                let rows = [
                    ("حساب", explanation.account_name.as_str()),
                    ("نوع", explanation.account_type.as_str()),
                    ("ماهیت", explanation.nature.as_str()),
                    ("توضیح", explanation.explanation.as_str()),
                ];
                let table = rows
                    .iter()
                    .map(|(label, value)| format!("{}: {}", self.label(label), value))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "{}\n\n{}",
                    table,
                    self.info(&format!("نکته کاربردی: {}", explanation.practical_tip))
                )
            }
            View::Text { body } => format!("{}\n{}", self.label("نتیجه:"), body),
            View::Error { message, body } => {
                format!("{}\n{}\n{}", self.warning(message), self.label("نتیجه:"), body)
            }
        }
    }
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}
