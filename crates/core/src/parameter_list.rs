//! A checked, ordered list of parameters.
//!
//! All configuration errors are detected here, once, before any frontend is built:
//! names and flag spellings must be unique, reserved spellings stay free, and the
//! positionals are laid out so that a command line can be mapped onto them.

use std::collections::HashSet;
use std::ops::Deref;

use log::debug;

use crate::error::Error::{
    EmptyName, InvalidFlagDefault, InvalidNargs, NameWithSpace, NonUniqueFlag, NonUniqueName,
    PositionalFlag, RequiredAfterOptional, ReservedFlag, VariablePositionalNotLast, VerifiedFlag,
};
use crate::error::Result;
use crate::parameter::{Nargs, Parameter};
use crate::value::Value;

/// Spellings owned by the frontends themselves.
pub const RESERVED_FLAGS: [&str; 6] = ["-h", "--help", "-V", "--version", "--gui", "--cli"];

#[derive(Debug, Clone)]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    /// Checks the parameters and wraps them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a name is empty, contains whitespace or is used twice
    /// - a flag spelling is used twice or is reserved
    /// - a flag parameter has a verify function, no flag spelling or a non-boolean default
    /// - an exact value count is below two
    /// - a variable-arity positional is not the last positional
    /// - a required positional follows an optional one
    pub fn new(parameters: Vec<Parameter>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut flags = HashSet::new();

        for parameter in &parameters {
            validate_name(&parameter.name)?;

            if !names.insert(parameter.name.as_str()) {
                return Err(NonUniqueName(parameter.name.clone()));
            }

            for flag in parameter.flags() {
                if RESERVED_FLAGS.contains(&flag.as_str()) {
                    return Err(ReservedFlag {
                        parameter: parameter.name.clone(),
                        flag,
                    });
                }

                if !flags.insert(flag.clone()) {
                    return Err(NonUniqueFlag {
                        parameter: parameter.name.clone(),
                        flag,
                    });
                }
            }

            if let Nargs::Exactly(count) = parameter.nargs {
                if count < 2 {
                    return Err(InvalidNargs {
                        parameter: parameter.name.clone(),
                        nargs: count.to_string(),
                    });
                }
            }

            if parameter.is_flag() {
                if parameter.verify.is_some() {
                    return Err(VerifiedFlag(parameter.name.clone()));
                }
                if parameter.is_positional() {
                    return Err(PositionalFlag(parameter.name.clone()));
                }
                if let Some(default) = &parameter.default {
                    if !matches!(default, Value::Bool(_)) {
                        return Err(InvalidFlagDefault {
                            parameter: parameter.name.clone(),
                            found: default.kind(),
                        });
                    }
                }
            }
        }

        debug!(
            "Parameter list: {}",
            parameters
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let list = Self { parameters };
        validate_positionals(list.positionals())?;

        Ok(list)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    pub fn positionals(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_positional())
    }
}

impl Deref for ParameterList {
    type Target = [Parameter];

    fn deref(&self) -> &Self::Target {
        &self.parameters
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.chars().any(char::is_whitespace) {
        return Err(NameWithSpace(name.to_string()));
    }

    Ok(())
}

fn validate_positionals<'a>(positionals: impl Iterator<Item = &'a Parameter>) -> Result<()> {
    let positionals: Vec<&Parameter> = positionals.collect();

    let mut seen_optional = false;
    for (index, parameter) in positionals.iter().enumerate() {
        let is_last = index + 1 == positionals.len();

        if parameter.nargs.is_variable() && !is_last {
            return Err(VariablePositionalNotLast(parameter.name.clone()));
        }

        if parameter.is_required() {
            if seen_optional {
                return Err(RequiredAfterOptional(parameter.name.clone()));
            }
        } else {
            seen_optional = true;
        }
    }

    Ok(())
}
