use std::fmt;
use std::io::{BufRead, Write};

use crate::error::AppError;

/// Line-oriented console over any reader/writer pair.
///
/// Every question is written on its own line and answered by one input
/// line. End of input surfaces as `AppError::InputClosed`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `question` and return the trimmed answer.
    pub fn line(&mut self, question: &str) -> Result<String, AppError> {
        if !question.is_empty() {
            writeln!(self.output, "{question}")?;
        }
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// Ask until `validate` accepts the answer, showing its message after
    /// each rejection.
    pub fn ask<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, AppError> {
        loop {
            let answer = self.line(question)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(message)?,
            }
        }
    }

    /// Show a numbered `menu` and return an option in `1..=options`.
    pub fn choose(&mut self, menu: &str, options: u32) -> Result<u32, AppError> {
        self.ask(menu, |answer| {
            answer
                .parse::<u32>()
                .ok()
                .filter(|option| (1..=options).contains(option))
                .ok_or_else(|| "Invalid option. Please try again.".to_string())
        })
    }

    /// Ask a yes/no question; anything but `yes`/`y` counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        let answer = self.line(question)?.to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }

    /// Print a recoverable error and carry on; hand fatal ones back.
    pub fn report(&mut self, error: AppError) -> Result<(), AppError> {
        if error.is_recoverable() {
            self.say(error)
        } else {
            Err(error)
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap_or_default()
    }

    #[test]
    fn test_line_trims() -> anyhow::Result<()> {
        let mut p = prompt("  hello  \n");
        assert_eq!(p.line("Say something")?, "hello");
        assert_eq!(printed(p), "Say something\n");
        Ok(())
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = prompt("");
        assert!(matches!(p.line("?"), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_choose_reprompts() -> anyhow::Result<()> {
        let mut p = prompt("abc\n9\n2\n");
        assert_eq!(p.choose("1.A\n2.B", 2)?, 2);
        let out = printed(p);
        assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
        Ok(())
    }

    #[test]
    fn test_ask_shows_validator_message() -> anyhow::Result<()> {
        let mut p = prompt("-3\n7\n");
        let value = p.ask("Number", |s| {
            s.parse::<i32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| "positive please".to_string())
        })?;
        assert_eq!(value, 7);
        assert!(printed(p).contains("positive please"));
        Ok(())
    }

    #[test]
    fn test_confirm() -> anyhow::Result<()> {
        let mut p = prompt("YES\nno\n");
        assert!(p.confirm("Sure?")?);
        assert!(!p.confirm("Sure?")?);
        Ok(())
    }

    #[test]
    fn test_report() {
        let mut p = prompt("");
        assert!(p.report(AppError::NoMachine).is_ok());
        assert!(matches!(p.report(AppError::InputClosed), Err(AppError::InputClosed)));
        assert!(printed(p).contains("You must build a machine first"));
    }
}
