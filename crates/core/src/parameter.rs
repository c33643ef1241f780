//! Declarative description of one input the target function needs.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::verify::Verifier;

/// Number of values a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// A boolean switch without a value.
    Flag,
    /// Exactly one value.
    One,
    /// A list of exactly this many values (at least two).
    Exactly(usize),
    /// Zero or one value (`?`).
    Optional,
    /// Any number of values (`*`).
    ZeroOrMore,
    /// At least one value (`+`).
    OneOrMore,
}

impl Nargs {
    /// Whether the parameter produces a list of values.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Nargs::Exactly(_) | Nargs::ZeroOrMore | Nargs::OneOrMore)
    }

    /// Whether the number of values is open-ended.
    #[must_use]
    pub fn is_variable(self) -> bool {
        matches!(self, Nargs::Optional | Nargs::ZeroOrMore | Nargs::OneOrMore)
    }

    /// Whether a value count satisfies this arity.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Nargs::Flag => count == 0,
            Nargs::One => count == 1,
            Nargs::Exactly(n) => count == n,
            Nargs::Optional => count <= 1,
            Nargs::ZeroOrMore => true,
            Nargs::OneOrMore => count >= 1,
        }
    }

    #[must_use]
    pub fn min_values(self) -> usize {
        match self {
            Nargs::Flag | Nargs::Optional | Nargs::ZeroOrMore => 0,
            Nargs::One | Nargs::OneOrMore => 1,
            Nargs::Exactly(n) => n,
        }
    }

    /// Builds the arity from a count, as written in a parameter file.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Nargs::Flag,
            1 => Nargs::One,
            n => Nargs::Exactly(n),
        }
    }

    /// Builds the arity from one of the symbols `?`, `*` or `+`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "?" => Some(Nargs::Optional),
            "*" => Some(Nargs::ZeroOrMore),
            "+" => Some(Nargs::OneOrMore),
            _ => symbol.parse::<usize>().ok().map(Self::from_count),
        }
    }
}

impl Display for Nargs {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Nargs::Flag => formatter.write_str("0"),
            Nargs::One => formatter.write_str("1"),
            Nargs::Exactly(n) => write!(formatter, "{n}"),
            Nargs::Optional => formatter.write_str("?"),
            Nargs::ZeroOrMore => formatter.write_str("*"),
            Nargs::OneOrMore => formatter.write_str("+"),
        }
    }
}

/// Kind of control used for a parameter in the graphical form.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    #[default]
    Text,
    #[serde(alias = "pass")]
    Password,
    File,
    Dir,
    #[serde(alias = "fileordir")]
    FileOrDir,
    #[serde(alias = "box")]
    Checkbox,
}

/// One input of the target function.
///
/// Built with [`Parameter::new`] and the chained setters:
///
/// ```
/// use genui_core::parameter::{Nargs, Parameter, Widget};
/// use genui_core::verify;
///
/// let file_path = Parameter::new("file_path")
///     .meta("input file")
///     .verify(verify::is_file())
///     .help("path to the input file")
///     .widget(Widget::File);
///
/// let option = Parameter::new("option")
///     .short('o')
///     .long("option")
///     .nargs(Nargs::Flag)
///     .default(false);
///
/// assert!(file_path.is_positional());
/// assert!(option.is_flag());
/// ```
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub meta: Option<String>,
    pub short: Option<char>,
    pub long: Option<String>,
    pub nargs: Nargs,
    pub default: Option<Value>,
    pub verify: Option<Verifier>,
    pub help: Option<String>,
    pub widget: Widget,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: None,
            short: None,
            long: None,
            nargs: Nargs::One,
            default: None,
            verify: None,
            help: None,
            widget: Widget::Text,
        }
    }

    #[must_use]
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    #[must_use]
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    #[must_use]
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    #[must_use]
    pub fn nargs(mut self, nargs: Nargs) -> Self {
        self.nargs = nargs;
        self
    }

    #[must_use]
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn verify(mut self, verify: impl Into<Verifier>) -> Self {
        self.verify = Some(verify.into());
        self
    }

    /// Uses a closure as verify function.
    #[must_use]
    pub fn verify_with<F>(self, function: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.verify(Verifier::new(function))
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    /// Display label: `meta` if given, the name otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.meta.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.nargs == Nargs::Flag
    }

    /// A flag always renders as a checkbox.
    #[must_use]
    pub fn effective_widget(&self) -> Widget {
        if self.is_flag() {
            Widget::Checkbox
        } else {
            self.widget
        }
    }

    /// Whether the user has to supply a value.
    ///
    /// Only positionals without a default that need at least one value are required;
    /// flag spellings are always optional.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.is_positional() && self.default.is_none() && self.nargs.min_values() > 0
    }

    /// The command line spellings of this parameter, dashes included.
    #[must_use]
    pub fn flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if let Some(short) = self.short {
            flags.push(format!("-{short}"));
        }
        if let Some(long) = &self.long {
            flags.push(format!("--{long}"));
        }
        flags
    }

    /// The value the parameter takes when nothing was supplied and there is no default.
    #[must_use]
    pub fn empty_value(&self) -> Value {
        match self.nargs {
            Nargs::Flag => Value::Bool(false),
            Nargs::ZeroOrMore => Value::List(Vec::new()),
            _ => Value::Unset,
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if let Some(help) = &self.help {
            write!(formatter, " ({help})")?;
        }

        Ok(())
    }
}
