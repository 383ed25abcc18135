//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{ColorMode, Printer};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Reads the answer from stdin. See [confirm_with] for the accepted answers.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(prompt, &mut stdin.lock(), &mut stdout)
}

/// Asks `prompt` on `output` and reads one line from `input`.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is "no" if user presses Enter or input ends.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, EOF, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{} (y/N): ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let response = answer.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> bool {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        confirm_with("Overwrite?", &mut input, &mut output).unwrap()
    }

    #[test]
    fn test_confirm_accepts_yes_variants() {
        for text in ["y\n", "Y\n", "yes\n", "YES\n", "  Yes  \n", "y"] {
            assert!(answer(text), "{:?} should confirm", text);
        }
    }

    #[test]
    fn test_confirm_declines_everything_else() {
        for text in ["\n", "n\n", "no\n", "yep\n", "sure\n", ""] {
            assert!(!answer(text), "{:?} should decline", text);
        }
    }

    #[test]
    fn test_confirm_writes_prompt() {
        let mut input = Cursor::new(b"n\n".to_vec());
        let mut output = Vec::new();
        confirm_with("Do you want to overwrite it?", &mut input, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Do you want to overwrite it? (y/N): "
        );
    }
}
