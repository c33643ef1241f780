//! The orchestrator tying parameters, frontends and the target together.

use std::env;
use std::ffi::OsString;
use std::marker::PhantomData;

use genui_core::arguments::{check_names, Collected, FromArguments};
use genui_core::config::{title_from_program, InterfaceSettings, DEFAULT_VERSION};
use genui_core::error::{Error, Result};
use genui_core::parameter::Parameter;
use genui_core::parameter_list::ParameterList;
use log::{debug, info, warn};

use crate::mode::{has_switch, select_frontend, Frontend, GUI_SWITCH};

/// Title used when the program name gives nothing usable.
pub const DEFAULT_TITLE: &str = "genui";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The target ran; this is what it returned.
    Completed(R),
    /// Help or version was shown, or the form was closed. The target did not run.
    Dismissed,
}

impl<R> Outcome<R> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn completed(self) -> Option<R> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Dismissed => None,
        }
    }
}

/// Generates a command line and a graphical form for a parameter list and
/// calls a target with the validated input.
///
/// `T` is the record the target takes, built from the validated arguments. Its
/// field names are checked against the parameter names when the orchestrator is
/// built, so a mismatch fails before any input is collected.
///
/// # Examples
///
/// ```rust
/// use genui::{Arguments, GenericUi, Outcome, Parameter};
///
/// let mut ui = GenericUi::new(vec![Parameter::new("name")], |mut arguments: Arguments| {
///     arguments.take::<String>("name").map(|name| format!("Hello, {name}!"))
/// })?
/// .title("Greeter");
///
/// let outcome = ui.run_with(["greet", "world"])?;
/// assert_eq!(outcome.completed().transpose()?, Some("Hello, world!".to_string()));
/// # Ok::<(), genui::Error>(())
/// ```
pub struct GenericUi<T, F> {
    parameters: ParameterList,
    target: F,
    title: Option<String>,
    version: String,
    record: PhantomData<fn() -> T>,
}

impl<T: FromArguments, F> GenericUi<T, F> {
    /// Builds the orchestrator from parameter descriptions.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parameter list is malformed or its
    /// names differ from the fields of `T`.
    pub fn new<R>(parameters: Vec<Parameter>, target: F) -> Result<Self>
    where
        F: FnMut(T) -> R,
    {
        Self::from_list(ParameterList::new(parameters)?, target)
    }

    /// Builds the orchestrator from an already checked list, for example one read
    /// from a parameter file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the names differ from the fields of `T`.
    pub fn from_list<R>(parameters: ParameterList, target: F) -> Result<Self>
    where
        F: FnMut(T) -> R,
    {
        check_names::<T>(&parameters)?;
        debug!("Orchestrating {} parameter(s)", parameters.len());

        Ok(Self {
            parameters,
            target,
            title: None,
            version: DEFAULT_VERSION.to_string(),
            record: PhantomData,
        })
    }

    /// Sets the window title and CLI description. Defaults to the program's
    /// file name.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    /// Collects input from the process arguments and calls the target.
    ///
    /// # Errors
    ///
    /// See [`GenericUi::run_with`].
    pub fn run<R>(&mut self) -> Result<Outcome<R>>
    where
        F: FnMut(T) -> R,
    {
        self.run_with(env::args_os())
    }

    /// Collects input from explicit arguments, program name first, and calls the
    /// target.
    ///
    /// The target runs at most once, and only with fully validated input.
    /// Whatever it returns, errors included, comes back inside
    /// [`Outcome::Completed`].
    ///
    /// # Errors
    ///
    /// Returns usage and validation errors from the command line, and
    /// [`Error::Gui`] when the form fails while running. When no window can be
    /// opened the command line takes over, unless `--gui` was given, in which
    /// case [`Error::GuiUnavailable`] is returned.
    pub fn run_with<R, I, S>(&mut self, args: I) -> Result<Outcome<R>>
    where
        F: FnMut(T) -> R,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let forced_gui = has_switch(&args, GUI_SWITCH);
        let (frontend, args) = select_frontend(args);
        let settings = self.settings(args.first());
        info!("Collecting input through the {} frontend", frontend);

        let collected = match frontend {
            Frontend::Cli => genui_cli::arguments::collect(&settings, &self.parameters, args)?,
            Frontend::Gui => {
                match form_result(genui_gui::run_form(&settings, &self.parameters), forced_gui)? {
                    Some(collected) => collected,
                    None => genui_cli::arguments::collect(&settings, &self.parameters, args)?,
                }
            }
        };

        match collected {
            Collected::Submitted(arguments) => {
                let record = T::from_arguments(arguments)?;
                info!("Invoking target");
                Ok(Outcome::Completed((self.target)(record)))
            }
            Collected::Dismissed => Ok(Outcome::Dismissed),
        }
    }

    fn settings(&self, program: Option<&OsString>) -> InterfaceSettings {
        let program = program
            .map(|program| program.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| title_from_program(&program, DEFAULT_TITLE));
        let program = title_from_program(&program, DEFAULT_TITLE);

        InterfaceSettings::new(program, title).version(self.version.clone())
    }
}

/// Keeps what the form collected, or `None` when the command line should take
/// over because no window could be opened.
fn form_result(result: Result<Collected>, forced_gui: bool) -> Result<Option<Collected>> {
    match result {
        Err(Error::GuiUnavailable(reason)) if !forced_gui => {
            warn!("{}, falling back to the command line", reason);
            Ok(None)
        }
        result => result.map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genui_core::arguments::Arguments;
    use genui_core::file_handling::get_parameters;
    use genui_core::parameter::{Nargs, Widget};
    use genui_core::value::Value;
    use genui_core::verify;
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{tempdir, NamedTempFile};

    #[derive(Debug, Clone, PartialEq)]
    struct Example {
        file_path: PathBuf,
        option: bool,
    }

    impl FromArguments for Example {
        fn names() -> Option<&'static [&'static str]> {
            Some(&["file_path", "option"])
        }

        fn from_arguments(mut arguments: Arguments) -> Result<Self> {
            Ok(Self {
                file_path: arguments.take("file_path")?,
                option: arguments.take("option")?,
            })
        }
    }

    fn example_parameters() -> Vec<Parameter> {
        vec![
            Parameter::new("file_path")
                .meta("input file")
                .verify(verify::is_file())
                .widget(Widget::File),
            Parameter::new("option")
                .short('o')
                .long("option")
                .nargs(Nargs::Flag)
                .default(false),
        ]
    }

    fn echo(arguments: Arguments) -> Arguments {
        arguments
    }

    #[test]
    fn test_duplicate_names_fail_at_construction() {
        let result = GenericUi::new(
            vec![Parameter::new("name"), Parameter::new("name").long("name")],
            echo,
        );
        assert!(matches!(result, Err(Error::NonUniqueName(name)) if name == "name"));
    }

    #[test]
    fn test_settings_from_program() {
        let ui = GenericUi::new(vec![Parameter::new("name")], echo).unwrap();
        let settings = ui.settings(Some(&OsString::from("/usr/bin/convert.exe")));
        assert_eq!(settings.program, "convert");
        assert_eq!(settings.title, "convert");
        assert_eq!(settings.version, DEFAULT_VERSION);

        let settings = ui.settings(None);
        assert_eq!(settings.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_explicit_title_and_version() {
        let ui = GenericUi::new(vec![Parameter::new("name")], echo)
            .unwrap()
            .title("Converter")
            .version("2.1");
        let settings = ui.settings(Some(&OsString::from("convert")));
        assert_eq!(settings.title, "Converter");
        assert_eq!(settings.version, "2.1");
    }

    #[test]
    fn test_run_with_cli_arguments() {
        let mut ui = GenericUi::new(
            vec![
                Parameter::new("count").verify(verify::integer()),
                Parameter::new("verbose").short('v').nargs(Nargs::Flag),
            ],
            echo,
        )
        .unwrap();

        let arguments = ui
            .run_with(["tool", "4", "-v"])
            .unwrap()
            .completed()
            .unwrap();
        assert_eq!(arguments.get("count"), Some(&Value::Integer(4)));
        assert_eq!(arguments.get("verbose"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_cli_switch_forces_command_line() {
        let mut ui = GenericUi::new(
            vec![Parameter::new("level").long("level").default("info")],
            echo,
        )
        .unwrap();

        let arguments = ui.run_with(["tool", "--cli"]).unwrap().completed().unwrap();
        assert_eq!(arguments.get("level"), Some(&Value::from("info")));
    }

    #[test]
    fn test_help_is_dismissed() {
        let mut calls = 0;
        let mut ui = GenericUi::new(vec![Parameter::new("name")], |_: Arguments| calls += 1)
            .unwrap();

        let outcome = ui.run_with(["tool", "--help"]).unwrap();
        assert_eq!(outcome, Outcome::Dismissed);
        drop(ui);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(Outcome::Completed(1).is_completed());
        assert!(!Outcome::<i32>::Dismissed.is_completed());
        assert_eq!(Outcome::Completed(1).completed(), Some(1));
        assert_eq!(Outcome::<i32>::Dismissed.completed(), None);
    }

    #[test]
    fn test_target_receives_typed_record() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let mut ui = GenericUi::new(example_parameters(), |example: Example| example).unwrap();

        let example = ui.run_with(["example", path]).unwrap().completed().unwrap();
        assert_eq!(example.file_path, file.path());
        assert!(!example.option);

        let example = ui.run_with(["example", "-o", path]).unwrap().completed().unwrap();
        assert!(example.option);
    }

    #[test]
    fn test_target_not_invoked_on_rejected_value() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let missing = missing.to_str().unwrap();

        let calls = RefCell::new(0);
        let mut ui = GenericUi::new(example_parameters(), |_: Example| {
            *calls.borrow_mut() += 1;
        })
        .unwrap();

        let error = ui.run_with(["example", missing]).unwrap_err();
        assert!(matches!(error, Error::Validation { .. }));
        assert!(error.to_string().contains(missing));
        assert_ne!(error.exit_code(), 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_target_not_invoked_on_usage_error() {
        let calls = RefCell::new(0);
        let mut ui = GenericUi::new(example_parameters(), |_: Example| {
            *calls.borrow_mut() += 1;
        })
        .unwrap();

        let error = ui.run_with(["example", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(error.exit_code(), 2);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let mut ui = GenericUi::new(example_parameters(), |example: Example| example).unwrap();

        let first = ui.run_with(["example", path, "--option"]).unwrap();
        let second = ui.run_with(["example", path, "--option"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unverified_value_passes_through() {
        let mut ui = GenericUi::new(
            vec![
                Parameter::new("name"),
                Parameter::new("greeting").long("greeting").default("Hello"),
            ],
            |arguments: Arguments| arguments,
        )
        .unwrap();

        let arguments = ui
            .run_with(["greet", "  world "])
            .unwrap()
            .completed()
            .unwrap();
        assert_eq!(arguments.get("name"), Some(&Value::from("  world ")));
        assert_eq!(arguments.get("greeting"), Some(&Value::from("Hello")));
    }

    #[test]
    fn test_target_errors_are_returned_untouched() {
        let mut ui = GenericUi::new(vec![Parameter::new("name")], |_: Arguments| {
            Err::<(), _>(Error::Gui("downstream failure".to_string()))
        })
        .unwrap();

        let outcome = ui.run_with(["greet", "world"]).unwrap();
        match outcome {
            Outcome::Completed(Err(Error::Gui(message))) => assert_eq!(message, "downstream failure"),
            _ => panic!("Expected the target's own error"),
        }
    }

    #[test]
    fn test_record_name_mismatch_fails_at_construction() {
        let result = GenericUi::new(
            vec![Parameter::new("file_path"), Parameter::new("verbose").long("verbose")],
            |example: Example| example,
        );
        assert!(matches!(result, Err(Error::UnknownTargetParameter(name)) if name == "verbose"));

        let result = GenericUi::new(vec![Parameter::new("file_path")], |example: Example| example);
        assert!(matches!(result, Err(Error::MissingTargetParameter(name)) if name == "option"));
    }

    #[test]
    fn test_parameters_from_file() {
        let yaml_content = r#"
    - name: file_path
      meta: input file
      verify: file
      widget: file

    - name: option
      short: o
      long: option
      nargs: 0
      default: false
    "#;
        let mut parameter_file = NamedTempFile::new().unwrap();
        write!(parameter_file, "{yaml_content}").unwrap();
        let parameter_path = parameter_file.path().to_str().unwrap();

        let parameters = get_parameters(parameter_path).unwrap();
        let mut ui = GenericUi::from_list(parameters, |example: Example| example).unwrap();
        assert_eq!(ui.parameters().len(), 2);

        let example = ui
            .run_with(["example", "--cli", "-o", parameter_path])
            .unwrap()
            .completed()
            .unwrap();
        assert_eq!(example.file_path, PathBuf::from(parameter_path));
        assert!(example.option);
    }

    #[test]
    fn test_unavailable_form_falls_back_to_command_line() {
        let unavailable = || Err(Error::GuiUnavailable("no display found".to_string()));

        assert_eq!(form_result(unavailable(), false).unwrap(), None);
        assert!(matches!(
            form_result(unavailable(), true),
            Err(Error::GuiUnavailable(_))
        ));
        assert_eq!(
            form_result(Ok(Collected::Dismissed), false).unwrap(),
            Some(Collected::Dismissed)
        );
        assert!(matches!(
            form_result(Err(Error::Gui("lost".to_string())), false),
            Err(Error::Gui(_))
        ));
    }
}
