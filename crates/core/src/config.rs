//! Program-level settings shared by the frontends.

use std::path::Path;

/// Version identifier used when none is given.
pub const DEFAULT_VERSION: &str = "1.0";

/// How the generated interfaces present themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSettings {
    /// Program name shown in usage lines.
    pub program: String,
    /// Window title and CLI description.
    pub title: String,
    /// Version identifier shown by `--version` and next to the Run button.
    pub version: String,
}

impl InterfaceSettings {
    pub fn new(program: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            title: title.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Expands shell variables like `~` in a path.
///
/// # Examples
///
/// ```
/// use genui_core::config::expand_path;
///
/// let expanded = expand_path("~/parameters.yml");
/// assert!(!expanded.starts_with('~'));
/// assert_eq!(expand_path("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Derives a window title from the program path, as the file name without
/// extension. Falls back to `default` when nothing usable is left.
///
/// # Examples
///
/// ```
/// use genui_core::config::title_from_program;
///
/// assert_eq!(title_from_program("/usr/bin/convert-tool", "App"), "convert-tool");
/// assert_eq!(title_from_program("", "App"), "App");
/// ```
#[must_use]
pub fn title_from_program(program: &str, default: &str) -> String {
    Path::new(program)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map_or_else(|| default.to_string(), ToString::to_string)
}
