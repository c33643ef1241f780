//! Command-line argument definitions generated from the parameter list.
//!
//! Each parameter maps to exactly one `clap` argument through [`parameter_arg`];
//! [`build_command`] only assembles them, so the mapping stays a pure function.

use clap::{value_parser, Arg, ArgAction, Command};
use genui_core::config::InterfaceSettings;
use genui_core::parameter::{Nargs, Parameter};
use genui_core::parameter_list::ParameterList;
use genui_core::value::Value;
use log::debug;

use crate::report::describe_flags;

/// Builds the `clap` argument for one parameter.
///
/// Parameters without `short`/`long` become positionals, all others options.
/// A flag becomes a switch that flips its default: it sets `true` unless the
/// default is `true`, in which case it sets `false`.
#[must_use]
pub fn parameter_arg(parameter: &Parameter) -> Arg {
    let mut arg = Arg::new(parameter.name.clone());

    if let Some(short) = parameter.short {
        arg = arg.short(short);
    }
    if let Some(long) = &parameter.long {
        arg = arg.long(long.clone());
    }
    if let Some(help) = help_text(parameter) {
        arg = arg.help(help);
    }

    if parameter.is_flag() {
        let action = if matches!(parameter.default, Some(Value::Bool(true))) {
            ArgAction::SetFalse
        } else {
            ArgAction::SetTrue
        };
        return arg.action(action);
    }

    arg = arg
        .value_name(parameter.label().to_string())
        .value_parser(value_parser!(String))
        .allow_negative_numbers(true)
        .required(parameter.is_required());

    match (parameter.nargs, parameter.is_positional()) {
        (Nargs::Optional, false) => arg.num_args(0..=1).action(ArgAction::Set),
        (Nargs::Exactly(n), _) => arg.num_args(n).action(ArgAction::Append),
        (Nargs::ZeroOrMore, false) => arg.num_args(0..).action(ArgAction::Append),
        (Nargs::ZeroOrMore | Nargs::OneOrMore, _) => arg.num_args(1..).action(ArgAction::Append),
        _ => arg.num_args(1).action(ArgAction::Set),
    }
}

fn help_text(parameter: &Parameter) -> Option<String> {
    let default = parameter
        .default
        .as_ref()
        .filter(|_| !parameter.is_flag())
        .map(|default| format!("[default: {default}]"));

    match (&parameter.help, default) {
        (Some(help), Some(default)) => Some(format!("{help} {default}")),
        (Some(help), None) => Some(help.clone()),
        (None, default) => default,
    }
}

/// Builds the complete command line interface for a parameter list.
///
/// # Examples
///
/// ```rust
/// use genui_cli::cli_args::build_command;
/// use genui_core::config::InterfaceSettings;
/// use genui_core::parameter::{Nargs, Parameter};
/// use genui_core::parameter_list::ParameterList;
///
/// let parameters = ParameterList::new(vec![
///     Parameter::new("file_path").meta("input file"),
///     Parameter::new("option").short('o').long("option").nargs(Nargs::Flag),
/// ])?;
/// let settings = InterfaceSettings::new("example", "Example Tool");
///
/// let matches = build_command(&settings, &parameters)
///     .try_get_matches_from(["example", "input.txt", "-o"])
///     .unwrap();
/// assert!(matches.get_flag("option"));
/// # Ok::<(), genui_core::error::Error>(())
/// ```
#[must_use]
pub fn build_command(settings: &InterfaceSettings, parameters: &ParameterList) -> Command {
    parameters.iter().fold(
        Command::new(settings.program.clone())
            .about(settings.title.clone())
            .version(settings.version.clone()),
        |command, parameter| {
            debug!(
                "CLI argument for `{}`: {} ({} value(s))",
                parameter.name,
                describe_flags(&parameter.flags()),
                parameter.nargs
            );
            command.arg(parameter_arg(parameter))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use genui_core::verify;

    fn settings() -> InterfaceSettings {
        InterfaceSettings::new("example", "Example Tool").version("1")
    }

    fn example_parameters() -> ParameterList {
        ParameterList::new(vec![
            Parameter::new("file_path")
                .meta("input file")
                .verify(verify::is_file())
                .help("path to the input file"),
            Parameter::new("option")
                .short('o')
                .long("option")
                .nargs(Nargs::Flag)
                .default(false)
                .help("an option that can left out to be set to False"),
        ])
        .unwrap()
    }

    #[test]
    fn test_command_is_consistent() {
        build_command(&settings(), &example_parameters()).debug_assert();
    }

    #[test]
    fn test_positional_is_required() {
        let arg = parameter_arg(&Parameter::new("file_path"));
        assert!(arg.is_positional());
        assert!(arg.is_required_set());
    }

    #[test]
    fn test_option_is_not_positional() {
        let arg = parameter_arg(&Parameter::new("output").short('O').long("output"));
        assert!(!arg.is_positional());
        assert!(!arg.is_required_set());
        assert_eq!(arg.get_short(), Some('O'));
        assert_eq!(arg.get_long(), Some("output"));
    }

    #[test]
    fn test_flag_actions() {
        let off = parameter_arg(&Parameter::new("option").long("option").nargs(Nargs::Flag));
        assert!(matches!(off.get_action(), ArgAction::SetTrue));

        let on = parameter_arg(
            &Parameter::new("color")
                .long("no-color")
                .nargs(Nargs::Flag)
                .default(true),
        );
        assert!(matches!(on.get_action(), ArgAction::SetFalse));
    }

    #[test]
    fn test_meta_becomes_value_name() {
        let arg = parameter_arg(&Parameter::new("file_path").meta("input file"));
        let names: Vec<String> = arg
            .get_value_names()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["input file"]);
    }

    #[test]
    fn test_help_mentions_default() {
        let arg = parameter_arg(
            &Parameter::new("retries")
                .long("retries")
                .default(3)
                .help("number of retries"),
        );
        assert_eq!(
            arg.get_help().unwrap().to_string(),
            "number of retries [default: 3]"
        );
    }

    #[test]
    fn test_flag_help_omits_default() {
        let arg = parameter_arg(
            &Parameter::new("option")
                .long("option")
                .nargs(Nargs::Flag)
                .default(false)
                .help("toggle"),
        );
        assert_eq!(arg.get_help().unwrap().to_string(), "toggle");
    }

    #[test]
    fn test_parse_example() {
        let matches = build_command(&settings(), &example_parameters())
            .try_get_matches_from(["example", "input.txt", "--option"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("file_path"),
            Some(&"input.txt".to_string())
        );
        assert!(matches.get_flag("option"));
    }

    #[test]
    fn test_missing_required_is_usage_error() {
        let result = build_command(&settings(), &example_parameters())
            .try_get_matches_from(["example"]);
        let error = result.unwrap_err();
        assert_eq!(
            error.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_unknown_argument_is_usage_error() {
        let result = build_command(&settings(), &example_parameters())
            .try_get_matches_from(["example", "input.txt", "--unknown"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn test_list_arguments() {
        let parameters = ParameterList::new(vec![
            Parameter::new("point").nargs(Nargs::Exactly(2)),
            Parameter::new("tags").long("tags").nargs(Nargs::ZeroOrMore),
        ])
        .unwrap();
        let command = build_command(&settings(), &parameters);
        command.clone().debug_assert();

        let matches = command
            .try_get_matches_from(["example", "1", "2", "--tags", "a", "b"])
            .unwrap();
        let point: Vec<&String> = matches.get_many::<String>("point").unwrap().collect();
        assert_eq!(point, vec!["1", "2"]);
        let tags: Vec<&String> = matches.get_many::<String>("tags").unwrap().collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_exact_count_is_enforced() {
        let parameters =
            ParameterList::new(vec![Parameter::new("point").nargs(Nargs::Exactly(2))]).unwrap();
        let result = build_command(&settings(), &parameters).try_get_matches_from(["example", "1"]);
        assert!(result.is_err());
    }
}
