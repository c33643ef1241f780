//! Choosing between the command line and the graphical form.

use std::ffi::OsString;
use std::fmt::{Display, Formatter};

pub const GUI_SWITCH: &str = "--gui";
pub const CLI_SWITCH: &str = "--cli";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Cli,
    Gui,
}

impl Display for Frontend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Frontend::Cli => f.write_str("command line"),
            Frontend::Gui => f.write_str("graphical"),
        }
    }
}

/// Picks the frontend for a process argument list, program name first.
///
/// `--gui` and `--cli` force a frontend and are removed from the returned
/// arguments; `--gui` wins if both are given. Without either, any argument
/// after the program name selects the command line, none selects the form.
/// Switches after a `--` separator are left alone.
///
/// # Examples
///
/// ```
/// use genui::mode::{select_frontend, Frontend};
///
/// let (frontend, args) = select_frontend(vec!["tool".into()]);
/// assert_eq!(frontend, Frontend::Gui);
/// assert_eq!(args.len(), 1);
///
/// let (frontend, args) = select_frontend(vec!["tool".into(), "--gui".into()]);
/// assert_eq!(frontend, Frontend::Gui);
/// assert_eq!(args.len(), 1);
/// ```
#[must_use]
pub fn select_frontend(mut args: Vec<OsString>) -> (Frontend, Vec<OsString>) {
    let gui = remove_switch(&mut args, GUI_SWITCH);
    let cli = remove_switch(&mut args, CLI_SWITCH);

    let frontend = match (gui, cli) {
        (true, _) => Frontend::Gui,
        (false, true) => Frontend::Cli,
        _ if args.len() > 1 => Frontend::Cli,
        _ => Frontend::Gui,
    };

    (frontend, args)
}

/// Whether `switch` is given before any `--` separator, program name excluded.
#[must_use]
pub fn has_switch(args: &[OsString], switch: &str) -> bool {
    args.iter()
        .take(separator(args))
        .skip(1)
        .any(|arg| arg == switch)
}

fn separator(args: &[OsString]) -> usize {
    args.iter()
        .position(|arg| arg == "--")
        .unwrap_or(args.len())
}

fn remove_switch(args: &mut Vec<OsString>, switch: &str) -> bool {
    let end = separator(args);
    let found = has_switch(args, switch);

    if found {
        let mut index = 0;
        args.retain(|arg| {
            let keep = index == 0 || index >= end || arg != switch;
            index += 1;
            keep
        });
    }
    found
}
