//! Reading parameter lists from YAML parameter files.

use std::fs::File;

use log::debug;

use crate::config::expand_path;
use crate::error::{Error, Result};
use crate::parameter_definitions::ParameterDefinition;
use crate::parameter_list::ParameterList;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads the raw parameter definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or does not match the expected structure
/// - The file contains no definitions
pub fn get_parameter_definitions(path: &str) -> Result<Vec<ParameterDefinition>> {
    let path = expand_path(path);
    debug!("Reading parameter definitions from `{}`", path);

    let reader = get_reader("parameter definition", &path)?;

    let definitions: Vec<ParameterDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "parameter definition".to_string(),
            path.clone(),
            e,
        )
    })?;

    if definitions.is_empty() {
        return Err(Error::EmptyParameterDefinition { path });
    }

    Ok(definitions)
}

/// Reads a YAML parameter file into a checked [`ParameterList`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the declared
/// parameters do not form a valid list.
pub fn get_parameters(path: &str) -> Result<ParameterList> {
    let parameters = get_parameter_definitions(path)?
        .iter()
        .map(|definition| {
            debug!("Declared parameter {}", definition);
            definition.to_parameter()
        })
        .collect::<Result<Vec<_>>>()?;

    ParameterList::new(parameters)
}
