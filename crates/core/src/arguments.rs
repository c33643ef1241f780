//! Validated arguments and the typed record the target function receives.

use indexmap::IndexMap;

use crate::error::Error::{MissingArgument, MissingTargetParameter, UnknownTargetParameter};
use crate::error::Result;
use crate::parameter_list::ParameterList;
use crate::value::{FromValue, Value};

/// The normalized values of one run, in parameter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: IndexMap<String, Value>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Moves a value out and converts it into a typed field.
    ///
    /// # Errors
    ///
    /// Returns [`MissingArgument`] if there is no value for `name`, or a conversion
    /// error if the value does not fit `T`.
    pub fn take<T: FromValue>(&mut self, name: &str) -> Result<T> {
        let value = self
            .values
            .shift_remove(name)
            .ok_or_else(|| MissingArgument(name.to_string()))?;
        T::from_value(name, value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// What a frontend hands back after collecting input.
#[derive(Debug, Clone, PartialEq)]
pub enum Collected {
    /// All input was validated.
    Submitted(Arguments),
    /// The user left without submitting (help shown, window closed).
    Dismissed,
}

/// A typed record with one field per parameter.
///
/// ```
/// use std::path::PathBuf;
/// use genui_core::arguments::{Arguments, FromArguments};
/// use genui_core::error::Result;
///
/// struct Example {
///     file_path: PathBuf,
///     option: bool,
/// }
///
/// impl FromArguments for Example {
///     fn names() -> Option<&'static [&'static str]> {
///         Some(&["file_path", "option"])
///     }
///
///     fn from_arguments(mut arguments: Arguments) -> Result<Self> {
///         Ok(Self {
///             file_path: arguments.take("file_path")?,
///             option: arguments.take("option")?,
///         })
///     }
/// }
/// ```
pub trait FromArguments: Sized {
    /// The field names the record expects, or `None` if it takes any.
    fn names() -> Option<&'static [&'static str]>;

    /// Builds the record from validated arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing or has the wrong type.
    fn from_arguments(arguments: Arguments) -> Result<Self>;
}

impl FromArguments for Arguments {
    fn names() -> Option<&'static [&'static str]> {
        None
    }

    fn from_arguments(arguments: Arguments) -> Result<Self> {
        Ok(arguments)
    }
}

/// Checks that the parameter names and the record fields match one to one.
///
/// # Errors
///
/// Returns [`UnknownTargetParameter`] for a parameter the record does not know and
/// [`MissingTargetParameter`] for a field no parameter provides.
pub fn check_names<T: FromArguments>(parameters: &ParameterList) -> Result<()> {
    let Some(expected) = T::names() else {
        return Ok(());
    };

    if let Some(unknown) = parameters
        .names()
        .find(|name| !expected.iter().any(|field| field == name))
    {
        return Err(UnknownTargetParameter(unknown.to_string()));
    }

    if let Some(missing) = expected.iter().find(|name| parameters.get(name).is_none()) {
        return Err(MissingTargetParameter((*missing).to_string()));
    }

    Ok(())
}
