//! Pure formatting functions for UI output.
//!
//! Whether output is colored is carried by [Printer] itself, so callers
//! decide it once and pass it along. Every `format_*` method is pure and
//! testable; the matching print method only adds the I/O.

use console::Style;
use serde::{Deserialize, Serialize};

use crate::warning::Warning;

/// Width of the rules drawn around the tag message preview.
const RULE_WIDTH: usize = 40;

/// When to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the terminal supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no answer for this process.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes status lines to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    colored: bool,
}

impl Printer {
    pub fn new(colored: bool) -> Self {
        Printer { colored }
    }

    pub fn from_mode(mode: ColorMode) -> Self {
        Printer::new(mode.enabled())
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.colored).apply_to(text).to_string()
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().red(), "ERROR:"), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().yellow(), "⚠ WARNING:"), message)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().green(), "✓"), message)
    }

    pub fn format_status(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().yellow(), "→"), message)
    }

    /// Tag message framed by horizontal rules.
    pub fn format_tag_message_preview(&self, message: &str) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        format!(
            "\n{}\n{}\n{}\n{}\n",
            self.paint(Style::new().bold(), "Tag message:"),
            rule,
            message,
            rule
        )
    }

    /// Commands for publishing a locally created tag.
    pub fn format_push_instructions(&self, tag: &str, remote: &str) -> String {
        let cyan = Style::new().cyan();
        format!(
            "\nTo push this tag to remote:\n  {}\n\nTo push all tags:\n  {}",
            self.paint(cyan.clone(), &format!("git push {} {}", remote, tag)),
            self.paint(cyan, &format!("git push {} --tags", remote))
        )
    }

    /// Format and print an error message in red.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    /// Format and print a warning in yellow.
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format_warning(message));
    }

    /// Display a workflow warning to the user.
    pub fn boundary_warning(&self, warning: &Warning) {
        self.warning(&warning.to_string());
    }

    /// Format and print a success message with green checkmark.
    pub fn success(&self, message: &str) {
        println!("{}", self.format_success(message));
    }

    /// Format and print a status message with yellow arrow.
    pub fn status(&self, message: &str) {
        println!("{}", self.format_status(message));
    }

    pub fn tag_message_preview(&self, message: &str) {
        println!("{}", self.format_tag_message_preview(message));
    }

    pub fn push_instructions(&self, tag: &str, remote: &str) {
        println!("{}", self.format_push_instructions(tag, remote));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escapes() {
        let printer = Printer::new(false);
        assert_eq!(printer.format_error("boom"), "ERROR: boom");
        assert_eq!(printer.format_warning("careful"), "⚠ WARNING: careful");
        assert_eq!(printer.format_success("done"), "✓ done");
        assert_eq!(printer.format_status("working"), "→ working");
    }

    #[test]
    fn test_colored_output_uses_ansi() {
        let printer = Printer::new(true);
        let error = printer.format_error("boom");
        assert!(error.contains("\x1b["), "expected escape codes in {:?}", error);
        assert!(error.ends_with("boom"));
        assert!(printer.format_success("done").contains("\x1b[32m"));
    }

    #[test]
    fn test_color_mode_forced() {
        assert!(Printer::from_mode(ColorMode::Always).is_colored());
        assert!(!Printer::from_mode(ColorMode::Never).is_colored());
    }

    #[test]
    fn test_tag_message_preview() {
        let preview = Printer::new(false).format_tag_message_preview("## [v1.0.0]\n- one");
        let rule = "-".repeat(40);
        assert_eq!(
            preview,
            format!("\nTag message:\n{}\n## [v1.0.0]\n- one\n{}\n", rule, rule)
        );
    }

    #[test]
    fn test_push_instructions_use_remote() {
        let text = Printer::new(false).format_push_instructions("v1.0.0", "upstream");
        assert!(text.contains("git push upstream v1.0.0"));
        assert!(text.contains("git push upstream --tags"));
    }

    #[test]
    fn test_color_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorMode,
        }

        let parsed: Wrapper = toml::from_str("color = \"never\"").unwrap();
        assert_eq!(parsed.color, ColorMode::Never);
    }
}
