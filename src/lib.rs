//! genui
//!
//! Turns a declarative list of parameters into a command line interface and a
//! graphical form, validates whatever the user enters, and hands the result to a
//! target as a typed record.
//!
//! # Key Features
//!
//! - **Two Frontends**: A `clap` command line and an `iced` form, generated from the same parameters
//! - **Automatic Selection**: Arguments on the command line select the CLI, none select the form
//! - **Shared Validation**: Verify functions normalize every value the same way in both frontends
//! - **Typed Targets**: The target takes a record whose fields are checked against the parameters up front
//! - **Parameter Files**: Parameters can also be described in YAML
//!
//! # Architecture
//!
//! - [`generic_ui`]: The [`GenericUi`] orchestrator
//! - [`mode`]: Frontend selection
//! - `genui-core`: Parameters, values, verifiers and the validation dispatcher
//! - `genui-cli`, `genui-gui`: The two frontends
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use genui::{verify, Arguments, FromArguments, GenericUi, Nargs, Parameter, Result};
//!
//! struct Options {
//!     file_path: PathBuf,
//!     option: bool,
//! }
//!
//! impl FromArguments for Options {
//!     fn names() -> Option<&'static [&'static str]> {
//!         Some(&["file_path", "option"])
//!     }
//!
//!     fn from_arguments(mut arguments: Arguments) -> Result<Self> {
//!         Ok(Self {
//!             file_path: arguments.take("file_path")?,
//!             option: arguments.take("option")?,
//!         })
//!     }
//! }
//!
//! let parameters = vec![
//!     Parameter::new("file_path").meta("input file").verify(verify::is_file()),
//!     Parameter::new("option").short('o').long("option").nargs(Nargs::Flag).default(false),
//! ];
//!
//! let mut ui = GenericUi::new(parameters, |options: Options| {
//!     println!("{} {}", options.file_path.display(), options.option);
//! })?;
//! ui.run()?;
//! # Ok::<(), genui::Error>(())
//! ```

pub mod generic_ui;
pub mod mode;

pub use generic_ui::{GenericUi, Outcome};
pub use genui_core::arguments::{Arguments, FromArguments};
pub use genui_core::error::{Error, Result};
pub use genui_core::file_handling::get_parameters;
pub use genui_core::parameter::{Nargs, Parameter, Widget};
pub use genui_core::parameter_list::ParameterList;
pub use genui_core::value::Value;
pub use genui_core::verify;
