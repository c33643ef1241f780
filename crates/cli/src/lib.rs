//! genui CLI Library
//!
//! This crate provides the command-line frontend of genui. It turns a checked
//! parameter list into a `clap` command, parses the process arguments, and routes
//! every value through the shared validation dispatcher.
//!
//! # Key Features
//!
//! - **Generated Arguments**: One positional or option per parameter, derived by a pure function
//! - **Boolean Switches**: Flag parameters become switches that flip their default
//! - **Derived Help**: `--help` is built from each parameter's label, help text and default
//! - **Shared Validation**: Values pass the same dispatcher the graphical form uses
//! - **Error Reporting**: Usage and validation errors go to the standard error stream
//!
//! # Architecture
//!
//! - [`cli_args`]: Mapping from parameters to `clap` arguments
//! - [`arguments`]: Parsing, raw input extraction and validation
//! - [`report`]: Error output
//!
//! # Examples
//!
//! ```rust
//! use genui_cli::arguments::collect;
//! use genui_core::arguments::Collected;
//! use genui_core::config::InterfaceSettings;
//! use genui_core::parameter::{Nargs, Parameter};
//! use genui_core::parameter_list::ParameterList;
//! use genui_core::value::Value;
//!
//! let parameters = ParameterList::new(vec![
//!     Parameter::new("name"),
//!     Parameter::new("loud").short('l').nargs(Nargs::Flag),
//! ])?;
//! let settings = InterfaceSettings::new("greet", "Greeter");
//!
//! match collect(&settings, &parameters, ["greet", "world", "-l"])? {
//!     Collected::Submitted(arguments) => {
//!         assert_eq!(arguments.get("loud"), Some(&Value::Bool(true)));
//!     }
//!     Collected::Dismissed => unreachable!(),
//! }
//! # Ok::<(), genui_core::error::Error>(())
//! ```

pub mod arguments;
pub mod cli_args;
pub mod report;
