//! genui Core Library
//!
//! This crate holds everything both generated interfaces share: the declarative
//! parameter descriptions, the verify functions, the validation dispatcher and
//! the typed argument record handed to the target function.
//!
//! # Key Features
//!
//! - **Parameters**: Declarative description of one input (flags, arity, default, widget)
//! - **Parameter Lists**: Fail-fast checks for duplicate names and colliding flags
//! - **Verify Functions**: Built-in and custom validators that normalize raw input
//! - **Validation Dispatcher**: One code path from raw input to normalized values
//! - **Typed Arguments**: `FromArguments` records checked against the parameter names
//! - **Parameter Files**: YAML declarations using the built-in verify functions
//!
//! # Examples
//!
//! Validating raw input the way both frontends do:
//!
//! ```
//! use genui_core::parameter::{Nargs, Parameter};
//! use genui_core::parameter_list::ParameterList;
//! use genui_core::validation::{validate_all, RawInput};
//! use genui_core::value::Value;
//!
//! let parameters = ParameterList::new(vec![
//!     Parameter::new("name"),
//!     Parameter::new("option").short('o').nargs(Nargs::Flag),
//! ])?;
//!
//! let arguments = validate_all(
//!     &parameters,
//!     vec![RawInput::Single("world".to_string()), RawInput::Absent],
//! )?;
//! assert_eq!(arguments.get("option"), Some(&Value::Bool(false)));
//! # Ok::<(), genui_core::error::Error>(())
//! ```

pub mod arguments;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod parameter;
pub mod parameter_definitions;
pub mod parameter_list;
pub mod validation;
pub mod value;
pub mod verify;
