//! Error output on the standard error stream.

use std::io::{stderr, Write};

use crossterm::style::Stylize;
use genui_core::error::Error;
use itertools::Itertools;

/// Formats an error the way it is shown on the terminal, without styling.
///
/// Usage errors carry the parser's complete message and are kept as is.
#[must_use]
pub fn error_message(error: &Error) -> String {
    match error {
        Error::Usage(message) => message.trim_end().to_string(),
        _ => format!("error: {error}"),
    }
}

/// Writes an error to the standard error stream, highlighting its prefix.
pub fn report_error(error: &Error) {
    let message = error_message(error);
    let mut stderr = stderr();

    let styled = match message.strip_prefix("error:") {
        Some(rest) if !matches!(error, Error::Usage(_)) => {
            format!("{}{rest}", "error:".red().bold())
        }
        _ => message,
    };

    let _ = writeln!(stderr, "{styled}");
    let _ = stderr.flush();
}

/// Lists the command line spellings of flags, for log and error messages.
#[must_use]
pub fn describe_flags(flags: &[String]) -> String {
    if flags.is_empty() {
        "positional".to_string()
    } else {
        flags.iter().join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let error = Error::validation("input file", "'missing.txt' is no file");
        assert_eq!(
            error_message(&error),
            "error: argument input file: 'missing.txt' is no file"
        );
    }

    #[test]
    fn test_usage_message_is_kept() {
        let error = Error::Usage("error: unexpected argument '--x' found\n".to_string());
        assert_eq!(
            error_message(&error),
            "error: unexpected argument '--x' found"
        );
    }

    #[test]
    fn test_describe_flags() {
        assert_eq!(describe_flags(&[]), "positional");
        assert_eq!(
            describe_flags(&["-o".to_string(), "--option".to_string()]),
            "-o/--option"
        );
    }
}
