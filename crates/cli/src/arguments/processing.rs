use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::ArgMatches;
use genui_core::arguments::Collected;
use genui_core::config::InterfaceSettings;
use genui_core::error::{Error, Result};
use genui_core::parameter::Parameter;
use genui_core::parameter_list::ParameterList;
use genui_core::validation::{validate_all, RawInput};
use log::{debug, info};

use crate::cli_args::build_command;

/// Reads the raw input of every parameter out of the parsed matches, in
/// parameter order.
///
/// Anything that did not come from the command line itself is reported as
/// [`RawInput::Absent`], so the parameter default is applied by the dispatcher
/// exactly as in the graphical form.
#[must_use]
pub fn raw_inputs(matches: &ArgMatches, parameters: &ParameterList) -> Vec<RawInput> {
    parameters
        .iter()
        .map(|parameter| raw_input(matches, parameter))
        .collect()
}

fn raw_input(matches: &ArgMatches, parameter: &Parameter) -> RawInput {
    let id = parameter.name.as_str();

    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return RawInput::Absent;
    }

    if parameter.is_flag() {
        return RawInput::Flag(matches.get_flag(id));
    }

    let values: Vec<String> = matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if parameter.nargs.is_list() {
        RawInput::Many(values)
    } else {
        values
            .into_iter()
            .next()
            .map_or(RawInput::Absent, RawInput::Single)
    }
}

/// Parses the command line and validates every value.
///
/// Help and version requests are printed and reported as
/// [`Collected::Dismissed`].
///
/// # Errors
///
/// Returns:
/// - [`Error::Usage`] for unknown or missing arguments, with the parser's message
/// - the dispatcher's error for the first value that fails validation
pub fn collect<I, T>(
    settings: &InterfaceSettings,
    parameters: &ParameterList,
    args: I,
) -> Result<Collected>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = build_command(settings, parameters);

    let matches = match command.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(Collected::Dismissed);
        }
        Err(e) => return Err(Error::Usage(e.render().to_string())),
    };

    let raws = raw_inputs(&matches, parameters);
    debug!("Raw command line input: {:?}", raws);

    let arguments = validate_all(parameters, raws)?;
    info!("Command line input accepted");

    Ok(Collected::Submitted(arguments))
}
