use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parameter::{Nargs, Parameter, Widget};
use crate::value::Value;
use crate::verify::Builtin;

/// Arity as written in a parameter file: a count or one of `?`, `*`, `+`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NargsDefinition {
    Count(usize),
    Symbol(String),
}

impl Display for NargsDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NargsDefinition::Count(count) => write!(formatter, "{count}"),
            NargsDefinition::Symbol(symbol) => formatter.write_str(symbol),
        }
    }
}

/// A parameter as declared in a YAML parameter file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParameterDefinition {
    pub name: String,
    pub meta: Option<String>,
    pub short: Option<char>,
    pub long: Option<String>,
    pub nargs: Option<NargsDefinition>,
    pub default: Option<Value>,
    pub verify: Option<Builtin>,
    pub help: Option<String>,
    pub widget: Option<Widget>,
}

impl ParameterDefinition {
    /// Turns the declaration into a [`Parameter`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNargs`] if `nargs` is neither a count nor a known symbol.
    pub fn to_parameter(&self) -> Result<Parameter> {
        let nargs = match &self.nargs {
            None => Nargs::One,
            Some(NargsDefinition::Count(count)) => Nargs::from_count(*count),
            Some(definition @ NargsDefinition::Symbol(symbol)) => Nargs::from_symbol(symbol)
                .ok_or_else(|| Error::InvalidNargs {
                    parameter: self.name.clone(),
                    nargs: definition.to_string(),
                })?,
        };

        Ok(Parameter {
            name: self.name.clone(),
            meta: self.meta.clone(),
            short: self.short,
            long: self.long.clone(),
            nargs,
            default: self.default.clone(),
            verify: self.verify.map(Into::into),
            help: self.help.clone(),
            widget: self.widget.unwrap_or_default(),
        })
    }
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if let Some(help) = &self.help {
            write!(formatter, " ({help})")?;
        }

        Ok(())
    }
}
