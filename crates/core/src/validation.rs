//! The validation dispatcher shared by both frontends.
//!
//! Each frontend reduces whatever the user entered to a [`RawInput`] per parameter;
//! from there on both take the same path, which keeps them behaviorally equivalent.

use log::{debug, info};

use crate::arguments::Arguments;
use crate::error::Error::{Arity, MissingValue};
use crate::error::{Error, Result};
use crate::parameter::{Nargs, Parameter};
use crate::parameter_list::ParameterList;
use crate::value::Value;

/// What a frontend collected for one parameter, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Nothing was entered.
    Absent,
    /// State of a switch or checkbox.
    Flag(bool),
    Single(String),
    Many(Vec<String>),
}

/// Validates and normalizes the raw input of one parameter.
///
/// # Errors
///
/// Returns an error if:
/// - a required value is absent
/// - the number of values does not match `nargs`
/// - the verify function rejects one of the values
pub fn validate(parameter: &Parameter, raw: RawInput) -> Result<Value> {
    match raw {
        RawInput::Absent => absent_value(parameter),
        RawInput::Flag(state) => Ok(Value::Bool(state)),
        RawInput::Single(value) if parameter.nargs.is_list() => {
            validate_many(parameter, vec![value])
        }
        RawInput::Single(value) => verify_one(parameter, &value),
        RawInput::Many(values) => validate_many(parameter, values),
    }
}

/// Validates the raw inputs of a whole parameter list, stopping at the first failure.
///
/// `raws` is matched to `parameters` by position.
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn validate_all<I>(parameters: &ParameterList, raws: I) -> Result<Arguments>
where
    I: IntoIterator<Item = RawInput>,
{
    let mut raws = raws.into_iter();
    let mut arguments = Arguments::new();

    for parameter in parameters {
        let raw = raws.next().unwrap_or(RawInput::Absent);
        let value = validate(parameter, raw)?;
        debug!("Validated {}: {:?}", parameter, value);
        arguments.insert(parameter.name.clone(), value);
    }

    info!("Validated {} argument(s)", arguments.len());
    Ok(arguments)
}

fn absent_value(parameter: &Parameter) -> Result<Value> {
    if let Some(default) = &parameter.default {
        return Ok(default.clone());
    }

    if parameter.is_required() {
        return Err(MissingValue(parameter.label().to_string()));
    }

    Ok(parameter.empty_value())
}

fn verify_one(parameter: &Parameter, raw: &str) -> Result<Value> {
    match &parameter.verify {
        Some(verifier) => verifier
            .verify(raw)
            .map_err(|message| Error::validation(parameter.label(), message)),
        None => Ok(Value::Text(raw.to_string())),
    }
}

fn validate_many(parameter: &Parameter, values: Vec<String>) -> Result<Value> {
    if !parameter.nargs.accepts(values.len()) {
        return Err(Arity {
            parameter: parameter.label().to_string(),
            expected: expected_count(parameter.nargs),
            found: values.len(),
        });
    }

    if !parameter.nargs.is_list() {
        return match values.into_iter().next() {
            Some(value) => verify_one(parameter, &value),
            None => absent_value(parameter),
        };
    }

    if values.is_empty() {
        return absent_value(parameter);
    }

    let verified = values
        .iter()
        .map(|value| verify_one(parameter, value))
        .collect::<Result<Vec<Value>>>()?;

    Ok(Value::List(verified))
}

fn expected_count(nargs: Nargs) -> String {
    match nargs {
        Nargs::Flag => "0".to_string(),
        Nargs::One => "1".to_string(),
        Nargs::Exactly(n) => n.to_string(),
        Nargs::Optional => "0 or 1".to_string(),
        Nargs::ZeroOrMore => "any number of".to_string(),
        Nargs::OneOrMore => "1 or more".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify;

    #[test]
    fn test_no_verify_passes_raw_through() {
        let parameter = Parameter::new("name");
        let value = validate(&parameter, RawInput::Single("  raw value ".to_string())).unwrap();
        assert_eq!(value, Value::Text("  raw value ".to_string()));
    }

    #[test]
    fn test_absent_uses_default() {
        let parameter = Parameter::new("name").long("name").default("fallback");
        let value = validate(&parameter, RawInput::Absent).unwrap();
        assert_eq!(value, Value::from("fallback"));
    }

    #[test]
    fn test_default_is_not_verified() {
        let parameter = Parameter::new("count")
            .long("count")
            .verify(verify::integer())
            .default("not a number");
        let value = validate(&parameter, RawInput::Absent).unwrap();
        assert_eq!(value, Value::from("not a number"));
    }

    #[test]
    fn test_absent_required_fails() {
        let parameter = Parameter::new("file_path").meta("input file");
        let result = validate(&parameter, RawInput::Absent);
        assert!(matches!(result, Err(Error::MissingValue(label)) if label == "input file"));
    }

    #[test]
    fn test_absent_optional_is_unset() {
        let parameter = Parameter::new("output").long("output");
        assert_eq!(validate(&parameter, RawInput::Absent).unwrap(), Value::Unset);
    }

    #[test]
    fn test_absent_flag_is_false() {
        let parameter = Parameter::new("option").long("option").nargs(Nargs::Flag);
        assert_eq!(
            validate(&parameter, RawInput::Absent).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            validate(&parameter, RawInput::Flag(true)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_absent_zero_or_more_is_empty_list() {
        let parameter = Parameter::new("tags").long("tags").nargs(Nargs::ZeroOrMore);
        assert_eq!(
            validate(&parameter, RawInput::Absent).unwrap(),
            Value::List(vec![])
        );
    }

    #[test]
    fn test_verify_failure_carries_message() {
        let parameter = Parameter::new("file_path").verify(verify::is_file());
        let result = validate(&parameter, RawInput::Single("/no/such/file".to_string()));
        match result {
            Err(Error::Validation { parameter, message }) => {
                assert_eq!(parameter, "file_path");
                assert!(message.contains("/no/such/file"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_many_verified_in_order() {
        let parameter = Parameter::new("numbers")
            .nargs(Nargs::OneOrMore)
            .verify(verify::integer());
        let value = validate(
            &parameter,
            RawInput::Many(vec!["3".to_string(), "1".to_string(), "2".to_string()]),
        )
        .unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Integer(3),
                Value::Integer(1),
                Value::Integer(2)
            ])
        );
    }

    #[test]
    fn test_many_fails_on_any_rejected_value() {
        let parameter = Parameter::new("numbers")
            .nargs(Nargs::OneOrMore)
            .verify(verify::integer());
        let result = validate(
            &parameter,
            RawInput::Many(vec!["3".to_string(), "x".to_string()]),
        );
        assert!(matches!(result, Err(Error::Validation { message, .. }) if message.contains("'x'")));
    }

    #[test]
    fn test_exact_arity() {
        let parameter = Parameter::new("point").nargs(Nargs::Exactly(2));
        let result = validate(&parameter, RawInput::Many(vec!["1".to_string()]));
        match result {
            Err(Error::Arity {
                parameter,
                expected,
                found,
            }) => {
                assert_eq!(parameter, "point");
                assert_eq!(expected, "2");
                assert_eq!(found, 1);
            }
            _ => panic!("Expected Arity error"),
        }

        let value = validate(
            &parameter,
            RawInput::Many(vec!["1".to_string(), "2".to_string()]),
        )
        .unwrap();
        assert_eq!(value, Value::from(vec!["1", "2"]));
    }

    #[test]
    fn test_single_value_for_list_parameter_becomes_list() {
        let parameter = Parameter::new("tags").long("tags").nargs(Nargs::ZeroOrMore);
        let value = validate(&parameter, RawInput::Single("a".to_string())).unwrap();
        assert_eq!(value, Value::from(vec!["a"]));
    }

    #[test]
    fn test_many_values_for_single_parameter_fails() {
        let parameter = Parameter::new("name");
        let result = validate(
            &parameter,
            RawInput::Many(vec!["a".to_string(), "b".to_string()]),
        );
        assert!(matches!(result, Err(Error::Arity { found: 2, .. })));
    }

    #[test]
    fn test_validate_all_in_parameter_order() {
        let parameters = ParameterList::new(vec![
            Parameter::new("name"),
            Parameter::new("option").long("option").nargs(Nargs::Flag),
        ])
        .unwrap();

        let arguments = validate_all(
            &parameters,
            vec![RawInput::Single("x".to_string()), RawInput::Flag(true)],
        )
        .unwrap();

        let collected: Vec<(&str, &Value)> = arguments.iter().collect();
        assert_eq!(
            collected,
            vec![
                ("name", &Value::from("x")),
                ("option", &Value::Bool(true))
            ]
        );
    }

    #[test]
    fn test_validate_all_is_repeatable() {
        let parameters = ParameterList::new(vec![Parameter::new("count").verify(verify::integer())])
            .unwrap();
        let first = validate_all(&parameters, vec![RawInput::Single("5".to_string())]).unwrap();
        let second = validate_all(&parameters, vec![RawInput::Single("5".to_string())]).unwrap();
        assert_eq!(first, second);
    }
}
