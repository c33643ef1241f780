use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter name: name may not be empty")]
    EmptyName,

    #[error("Invalid parameter name `{}`: name may not contain whitespace", .0)]
    NameWithSpace(String),

    #[error("Found a non-unique parameter name: `{}`", .0)]
    NonUniqueName(String),

    #[error("Flag `{}` of parameter `{}` is already used", .flag, .parameter)]
    NonUniqueFlag { parameter: String, flag: String },

    #[error("Flag `{}` of parameter `{}` is reserved", .flag, .parameter)]
    ReservedFlag { parameter: String, flag: String },

    #[error("Flag parameter `{}` cannot have a verify function", .0)]
    VerifiedFlag(String),

    #[error("Flag parameter `{}` needs a `--long` or `-s` spelling", .0)]
    PositionalFlag(String),

    #[error("Flag parameter `{}` needs a boolean default, found {}", .parameter, .found)]
    InvalidFlagDefault {
        parameter: String,
        found: &'static str,
    },

    #[error("Positional parameter `{}` takes a variable number of values but is not the last positional", .0)]
    VariablePositionalNotLast(String),

    #[error("Required positional parameter `{}` follows an optional positional parameter", .0)]
    RequiredAfterOptional(String),

    #[error("Parameter `{}` has no counterpart in the target arguments", .0)]
    UnknownTargetParameter(String),

    #[error("Target argument `{}` has no parameter definition", .0)]
    MissingTargetParameter(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid nargs `{}` for parameter `{}`", .nargs, .parameter)]
    InvalidNargs { parameter: String, nargs: String },

    #[error("No parameters were found in the parameter definition YAML. Is `{}` empty?", .path)]
    EmptyParameterDefinition { path: String },

    #[error("argument {}: {}", .parameter, .message)]
    Validation { parameter: String, message: String },

    #[error("argument {}: expected {} value(s), got {}", .parameter, .expected, .found)]
    Arity {
        parameter: String,
        expected: String,
        found: usize,
    },

    #[error("argument {}: a value is required", .0)]
    MissingValue(String),

    #[error("No value for argument `{}`", .0)]
    MissingArgument(String),

    #[error("Argument `{}` expected a {} value, found {}", .name, .expected, .found)]
    ArgumentType {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error("{}", .0)]
    Usage(String),

    #[error("Graphical interface error: {}", .0)]
    Gui(String),

    #[error("Graphical interface unavailable: {}", .0)]
    GuiUnavailable(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn validation(parameter: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }

    /// Whether the error came from user input rather than from the parameter setup.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Arity { .. } | Self::MissingValue(_) | Self::Usage(_)
        )
    }

    /// Process exit code for this error: usage errors follow the argument parser
    /// convention of `2`, everything else is `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}
