//! Verify functions: validators and normalizers for one raw input value.
//!
//! A verify function receives the raw text the user typed (or picked) and either
//! returns the normalized [`Value`] or a human readable message describing why the
//! input was rejected. The message is shown by the active frontend.

use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::Value;

type VerifyFn = dyn Fn(&str) -> std::result::Result<Value, String> + Send + Sync;

/// A shareable verify function.
#[derive(Clone)]
pub struct Verifier(Arc<VerifyFn>);

impl Verifier {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Runs the verify function on one raw value.
    ///
    /// # Errors
    ///
    /// Returns the rejection message produced by the verify function.
    pub fn verify(&self, raw: &str) -> std::result::Result<Value, String> {
        (self.0)(raw)
    }
}

impl Debug for Verifier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Verifier(..)")
    }
}

/// Built-in verify functions that can be named from a parameter file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Builtin {
    File,
    Dir,
    FileOrDir,
    Integer,
    Float,
    NonEmpty,
}

impl From<Builtin> for Verifier {
    fn from(builtin: Builtin) -> Self {
        match builtin {
            Builtin::File => is_file(),
            Builtin::Dir => is_dir(),
            Builtin::FileOrDir => is_file_or_dir(),
            Builtin::Integer => integer(),
            Builtin::Float => float(),
            Builtin::NonEmpty => non_empty(),
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

/// Accepts the path of an existing file and returns it made absolute.
#[must_use]
pub fn is_file() -> Verifier {
    Verifier::new(|raw| {
        let path = expand(raw);
        if path.is_file() {
            Ok(Value::Path(absolute(&path)))
        } else {
            Err(format!("'{raw}' is no file"))
        }
    })
}

/// Accepts the path of an existing directory and returns it made absolute.
#[must_use]
pub fn is_dir() -> Verifier {
    Verifier::new(|raw| {
        let path = expand(raw);
        if path.is_dir() {
            Ok(Value::Path(absolute(&path)))
        } else {
            Err(format!("'{raw}' is no directory"))
        }
    })
}

/// Accepts the path of an existing file or directory and returns it made absolute.
#[must_use]
pub fn is_file_or_dir() -> Verifier {
    Verifier::new(|raw| {
        let path = expand(raw);
        if path.exists() {
            Ok(Value::Path(absolute(&path)))
        } else {
            Err(format!("'{raw}' is no file or directory"))
        }
    })
}

#[must_use]
pub fn integer() -> Verifier {
    Verifier::new(|raw| {
        raw.trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| format!("'{raw}' is not of type integer"))
    })
}

#[must_use]
pub fn float() -> Verifier {
    Verifier::new(|raw| {
        raw.trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| format!("'{raw}' is not of type float"))
    })
}

#[must_use]
pub fn non_empty() -> Verifier {
    Verifier::new(|raw| {
        if raw.trim().is_empty() {
            Err("value may not be empty".to_string())
        } else {
            Ok(Value::Text(raw.to_string()))
        }
    })
}

/// Accepts only one of the given choices.
#[must_use]
pub fn one_of<I, S>(choices: I) -> Verifier
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
    Verifier::new(move |raw| {
        if choices.iter().any(|choice| choice == raw) {
            Ok(Value::Text(raw.to_string()))
        } else {
            Err(format!(
                "'{raw}' is not one of {}",
                choices
                    .iter()
                    .map(|choice| format!("'{choice}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
    })
}
